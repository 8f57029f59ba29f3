//! Text completion: rewriting transcript chunks with an LLM.
//!
//! - `Completer` - a single system + user request to a completion service
//! - `OpenAiCompleter` - chat completions through `async-openai`
//! - `TaskGroup` - launch-ordered join barrier for concurrent requests
//! - `Dispatcher` - fans chunks out to a completer and stitches the results back together

mod dispatcher;
mod openai;
mod task_group;

pub use dispatcher::{Dispatcher, CHUNK_ERROR_PREFIX, MISSING_API_KEY_MESSAGE};
pub use openai::OpenAiCompleter;
pub use task_group::TaskGroup;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for text completion services.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Send one request made of a system instruction and user content, returning the reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
