pub mod error;
pub mod handlers;

use crate::core::{PostPipeline, PostWriter, TranscriptSource};
use crate::error::Result;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handlers::get_transcript;

pub fn router<T, W>(pipeline: PostPipeline<T, W>) -> Router
where
    T: TranscriptSource + Send + Sync + 'static,
    W: PostWriter + Send + Sync + 'static,
{
    // Open to every origin so browser extensions can call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/transcript/{video_id}", get(get_transcript::<T, W>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(pipeline))
}

pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
