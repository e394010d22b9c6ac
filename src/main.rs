mod cli;
mod core;
mod error;
mod logging;
mod server;

use crate::cli::{Cli, Commands};
use crate::core::{LlmConfig, PostPipeline, PostService, TranscriptService, extract_video_id};
use crate::error::Result;
use clap::Parser;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    // Development convenience: pick up OPENAI_API_KEY and friends from .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init_tracing()?;

    let llm = cli.llm_config();

    match cli.command {
        Some(Commands::Post { video, lang }) => {
            run_cli_post(llm, video, lang).await?;
        }
        Some(Commands::Serve) | None => {
            run_server(llm, cli.bind).await?;
        }
    }

    Ok(())
}

fn build_pipeline(llm: LlmConfig) -> Result<PostPipeline<TranscriptService, PostService>> {
    let transcript_service = TranscriptService::new()?;
    let post_service = PostService::new(llm);
    Ok(PostPipeline::new(transcript_service, post_service))
}

async fn run_server(llm: LlmConfig, bind: SocketAddr) -> Result<()> {
    let pipeline = build_pipeline(llm)?;
    server::serve(bind, server::router(pipeline)).await
}

async fn run_cli_post(llm: LlmConfig, video_input: String, lang: String) -> Result<()> {
    let video_id = extract_video_id(&video_input)
        .ok_or_else(|| error::Error::custom("Invalid video URL or ID"))?;

    tracing::info!(%video_id, %lang, "Processing video");

    let pipeline = build_pipeline(llm)?;
    let result = pipeline.run(&video_id, &lang).await?;

    let json = serde_json::to_string_pretty(&result)
        .map_err(|e| error::Error::custom(format!("Failed to encode result: {e}")))?;
    println!("{json}");

    Ok(())
}
