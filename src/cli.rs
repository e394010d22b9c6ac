use crate::core::{DEFAULT_LANG, LlmConfig};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "vidpost")]
#[command(about = "Turn YouTube transcripts into LinkedIn posts")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// API key for the LLM provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Alternative base URL for an OpenAI-compatible provider
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Address the HTTP server listens on
    #[arg(long, env = "VIDPOST_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Generate a post for one video and print the result as JSON
    Post {
        /// YouTube video URL or video ID
        video: String,

        /// Preferred transcript language
        #[arg(short, long, default_value = DEFAULT_LANG)]
        lang: String,
    },
}

impl Cli {
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.openai_api_key.clone(),
            api_base: self.openai_base_url.clone(),
        }
    }
}
