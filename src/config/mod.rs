//! Configuration module for Tubescribe.
//!
//! Handles loading application settings (file plus environment) and prompt templates.

mod prompts;
mod settings;

pub use prompts::{ImprovePrompts, Prompts};
pub use settings::{
    CompletionSettings, PromptSettings, ServerSettings, Settings, YoutubeSettings, ENV_API_KEY,
    ENV_AUTH_TOKEN, ENV_MODEL, ENV_PROXY,
};
