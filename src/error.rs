//! Error types for Tubescribe.

use thiserror::Error;

/// Library-level error type for Tubescribe operations.
#[derive(Error, Debug)]
pub enum TubescribeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Tokenizer unavailable: {0}")]
    Tokenizer(String),

    #[error("Transcript fetch failed: {0}")]
    Transcript(String),

    #[error("No transcript text for video {0}")]
    NoTranscript(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Completion failed: {0}")]
    Completion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Tubescribe operations.
pub type Result<T> = std::result::Result<T, TubescribeError>;
