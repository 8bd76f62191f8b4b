//! HTTP server
//!
//! A thin axum layer over [`QuizPipeline`]: routing, body parsing and the
//! mapping of pipeline errors onto status codes.

mod app;
mod error;
mod routes;

pub use app::{build_app, AppState, API_PREFIX};
pub use error::{ApiError, ErrorBody};
pub use routes::{GenerateQuizRequest, GenerateQuizResponse};

use crate::config::ServerConfig;
use crate::pipeline::QuizPipeline;
use crate::{ConfigError, QuizError};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serves the API until Ctrl-C is received
pub async fn serve(pipeline: QuizPipeline, config: &ServerConfig) -> Result<(), QuizError> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|e| ConfigError::InvalidAddress(format!("{}: {}", config.bind, e)))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_app(pipeline, config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, draining connections"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
