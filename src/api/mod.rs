//! HTTP API.
//!
//! - `POST /transcribe` - improve the transcript of a YouTube URL (requires the shared secret)
//! - `GET /transcript/{video_id}` - improve the transcript of a video ID
//! - `GET /health` - liveness probe

mod auth;
mod error;
mod handlers;

pub use auth::{require_auth, API_KEY_HEADER};
pub use error::ApiError;

use crate::pipeline::Pipeline;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
pub struct AppState {
    pub pipeline: Pipeline,
    /// Secret expected on protected routes. `None` locks them.
    pub auth_token: Option<String>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, auth_token: Option<String>) -> Self {
        Self {
            pipeline,
            auth_token,
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/transcribe", post(handlers::transcribe))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/transcript/{video_id}", get(handlers::get_transcript))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the API on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
