//! Token counting for chunk sizing.
//!
//! Counts only need to be a conservative estimate of what the completion model
//! sees; they decide where chunks are cut, nothing else.

use crate::error::{Result, TubescribeError};
use tiktoken_rs::CoreBPE;
use tracing::debug;

/// Counts tokens in a text fragment.
pub trait Tokenizer: Send + Sync {
    fn count_tokens(&self, text: &str) -> usize;
    fn name(&self) -> &str;
}

/// BPE tokenizer matching an OpenAI model's encoding.
pub struct TiktokenTokenizer {
    bpe: CoreBPE,
    name: String,
}

impl TiktokenTokenizer {
    /// Load the encoding used by `model`.
    ///
    /// Models tiktoken doesn't recognise fall back to `cl100k_base`.
    pub fn for_model(model: &str) -> Result<Self> {
        match tiktoken_rs::get_bpe_from_model(model) {
            Ok(bpe) => Ok(Self {
                bpe,
                name: model.to_string(),
            }),
            Err(e) => {
                debug!("No encoding registered for {}: {}, using cl100k_base", model, e);
                let bpe = tiktoken_rs::cl100k_base()
                    .map_err(|e| TubescribeError::Tokenizer(e.to_string()))?;
                Ok(Self {
                    bpe,
                    name: "cl100k_base".to_string(),
                })
            }
        }
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
