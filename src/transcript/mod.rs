//! Transcript retrieval.
//!
//! A transcript is the caption track of a video flattened into one string.

mod video_id;
mod youtube;

pub use video_id::extract_video_id;
pub use youtube::YoutubeTranscriptFetcher;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single timed caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Join caption entries into a single transcript string.
pub fn join_entries(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trait for caption providers.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the caption entries for a video.
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptEntry>>;

    /// Fetch the transcript as a single string.
    async fn fetch_text(&self, video_id: &str) -> Result<String> {
        let entries = self.fetch(video_id).await?;
        Ok(join_entries(&entries))
    }
}
