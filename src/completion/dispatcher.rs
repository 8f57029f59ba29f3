//! Concurrent chunk improvement.

use super::{Completer, TaskGroup};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Prefix of the inline text that replaces a chunk whose request failed.
pub const CHUNK_ERROR_PREFIX: &str = "Error:";

/// Returned instead of an improved transcript when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str = "OpenAI API key not configured.";

/// Sends every chunk to the completion service at once and reassembles the replies.
///
/// A chunk whose request fails is replaced by `Error: <message>` in its slot,
/// the rest of the transcript is still returned.
#[derive(Clone)]
pub struct Dispatcher {
    completer: Option<Arc<dyn Completer>>,
    system_prompt: Arc<str>,
}

impl Dispatcher {
    /// Create a dispatcher. `None` means no API key is configured.
    pub fn new(completer: Option<Arc<dyn Completer>>, system_prompt: &str) -> Self {
        Self {
            completer,
            system_prompt: Arc::from(system_prompt),
        }
    }

    /// Whether requests will actually be sent.
    pub fn is_configured(&self) -> bool {
        self.completer.is_some()
    }

    /// Improve each chunk concurrently and join the results in chunk order.
    #[instrument(skip(self, chunks), fields(chunks = chunks.len()))]
    pub async fn improve(&self, chunks: Vec<String>) -> String {
        let Some(completer) = &self.completer else {
            warn!("No OpenAI API key configured, skipping improvement");
            return MISSING_API_KEY_MESSAGE.to_string();
        };

        let mut group = TaskGroup::new();
        for chunk in chunks {
            let completer = Arc::clone(completer);
            let system = Arc::clone(&self.system_prompt);
            group.spawn(async move { completer.complete(&system, &chunk).await });
        }

        info!("Dispatched {} chunks to {}", group.len(), completer.model());

        let results = group.join().await;
        let mut failed = 0;
        let parts: Vec<String> = results
            .into_iter()
            .enumerate()
            .map(|(idx, result)| match result {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    failed += 1;
                    warn!("Chunk {} failed: {}", idx, e);
                    format!("{} {}", CHUNK_ERROR_PREFIX, e)
                }
                Err(e) => {
                    failed += 1;
                    warn!("Chunk {} task aborted: {}", idx, e);
                    format!("{} {}", CHUNK_ERROR_PREFIX, e)
                }
            })
            .collect();

        info!("Improved {} chunks ({} failed)", parts.len(), failed);
        parts.join(" ")
    }
}
