//! Serve command - run the HTTP API.

use crate::api::{self, AppState};
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use std::sync::Arc;

/// Run the HTTP API server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    let pipeline = Pipeline::from_settings(&settings)?;

    if !pipeline.dispatcher().is_configured() {
        Output::warning("OPENAI_API_KEY is not set; responses will contain a placeholder message.");
    }
    if settings.server.auth_token.is_none() {
        Output::warning("TUBESCRIBE_AUTH_TOKEN is not set; POST /transcribe will reject every request.");
    }

    let state = Arc::new(AppState::new(pipeline, settings.server.auth_token.clone()));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Tubescribe API Server");
    eprintln!();
    Output::success(&format!("Listening on http://{}", addr));
    eprintln!();
    eprintln!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Transcribe", "POST /transcribe (authenticated)");
    Output::kv("Transcript", "GET  /transcript/{video_id}");
    eprintln!();
    Output::info("Press Ctrl+C to stop the server.");

    tracing::info!("Listening on {}", addr);
    api::serve(listener, state).await?;

    Ok(())
}
