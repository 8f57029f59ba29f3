//! Prompt templates for Tubescribe.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub improve: ImprovePrompts,
}

/// Prompt used to rewrite a raw transcript chunk into readable prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovePrompts {
    pub system: String,
}

impl Default for ImprovePrompts {
    fn default() -> Self {
        Self {
            system: r#"You are an editor that restores punctuation and formatting to raw video transcripts.

The user message is a fragment of an automatically generated caption track. It has no punctuation, inconsistent capitalization and no paragraph breaks.

Rewrite it so it reads as well-formatted prose:
- Add punctuation (periods, commas, question marks, quotation marks) where the speech implies it
- Capitalize sentence starts and proper nouns
- Break the text into paragraphs at natural topic shifts

Never add, remove, reorder or replace individual words. Do not summarize, translate or comment on the text. Respond with the rewritten text only."#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts, letting files in `custom_dir` override the defaults.
    pub fn load(custom_dir: Option<&str>) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let improve_path = custom_path.join("improve.toml");
            if improve_path.exists() {
                let content = std::fs::read_to_string(&improve_path)?;
                prompts.improve = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }
}
