//! Tubescribe - readable transcripts for YouTube videos
//!
//! Fetches a video's caption track and rewrites it into punctuated, well-formatted
//! prose with an OpenAI chat model.
//!
//! # Overview
//!
//! Tubescribe:
//! - Retrieves captions straight from YouTube, optionally through a proxy
//! - Splits long transcripts into word-aligned chunks that fit a token budget
//! - Rewrites every chunk concurrently and stitches the results back in order
//! - Serves the whole pipeline over HTTP
//!
//! # Architecture
//!
//! - `config` - Settings (file plus environment) and prompt templates
//! - `tokenizer` - Token counting for chunk sizing
//! - `chunking` - Greedy token-bounded chunking
//! - `completion` - Completion service abstraction and concurrent dispatch
//! - `transcript` - Caption retrieval and video ID extraction
//! - `pipeline` - Fetch, chunk, improve
//! - `api` - HTTP endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use tubescribe::config::Settings;
//! use tubescribe::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::from_settings(&settings)?;
//!
//!     let text = pipeline.process("dQw4w9WgXcQ").await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chunking;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod openai;
pub mod pipeline;
pub mod tokenizer;
pub mod transcript;

pub use error::{Result, TubescribeError};
