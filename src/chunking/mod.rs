//! Token-bounded chunking of transcript text.
//!
//! Transcripts are far larger than a single completion request can hold, so the
//! text is cut into word-aligned pieces that each fit a token budget.

use crate::tokenizer::Tokenizer;
use std::sync::Arc;
use tracing::debug;

/// Default token budget for a single chunk.
pub const DEFAULT_MAX_TOKENS: usize = 16000;

/// Greedy word packer.
///
/// Words are taken in order and appended to the current chunk until the next
/// word would push its estimated size past `max_tokens`. Words are never split,
/// so a single word larger than the budget ends up alone in an oversized chunk.
#[derive(Clone)]
pub struct TokenChunker {
    tokenizer: Arc<dyn Tokenizer>,
    max_tokens: usize,
}

impl TokenChunker {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, max_tokens: usize) -> Self {
        Self {
            tokenizer,
            max_tokens,
        }
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Split `text` into chunks joined from whitespace-separated words.
    ///
    /// Joining the result with single spaces yields the whitespace-normalized input.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_tokens = 0usize;

        for word in text.split_whitespace() {
            // Cost includes the separator that follows the word.
            let cost = self.tokenizer.count_tokens(&format!("{} ", word));

            if !current.is_empty() && current_tokens + cost > self.max_tokens {
                chunks.push(current.join(" "));
                current.clear();
                current_tokens = 0;
            }

            current.push(word);
            current_tokens += cost;
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        debug!(
            "Split {} chars into {} chunks (max {} tokens, {})",
            text.len(),
            chunks.len(),
            self.max_tokens,
            self.tokenizer.name()
        );

        chunks
    }
}
