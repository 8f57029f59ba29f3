//! Improve command - one-shot transcript improvement from the terminal.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::TubescribeError;
use crate::pipeline::Pipeline;
use crate::transcript::extract_video_id;
use anyhow::Result;

/// Accept either a YouTube URL or a bare 11-character video ID.
fn resolve_video_id(input: &str) -> crate::Result<String> {
    let trimmed = input.trim();
    let is_bare_id = trimmed.len() == 11
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if is_bare_id {
        return Ok(trimmed.to_string());
    }
    extract_video_id(trimmed)
        .ok_or_else(|| TubescribeError::InvalidInput(format!("not a YouTube URL or video ID: {}", input)))
}

/// Run the improve command.
pub async fn run_improve(input: &str, max_tokens: Option<usize>, mut settings: Settings) -> Result<()> {
    let video_id = resolve_video_id(input)?;

    if let Some(max) = max_tokens {
        settings.completion.max_tokens_per_chunk = max;
    }

    let pipeline = Pipeline::from_settings(&settings)?;
    if !pipeline.dispatcher().is_configured() {
        Output::warning("OPENAI_API_KEY is not set; the transcript will not be improved.");
    }

    let spinner = Output::spinner(&format!("Improving transcript for {}...", video_id));
    let result = pipeline.process(&video_id).await;
    spinner.finish_and_clear();

    let text = result?;
    println!("{}", text);
    Output::success(&format!("Done ({} chars)", text.len()));

    Ok(())
}
