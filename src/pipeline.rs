//! Transcript improvement pipeline.
//!
//! Fetch captions, cut them into token-bounded chunks, rewrite every chunk
//! concurrently and return the reassembled text.

use crate::chunking::TokenChunker;
use crate::completion::{Completer, Dispatcher, OpenAiCompleter};
use crate::config::{Prompts, Settings};
use crate::error::{Result, TubescribeError};
use crate::tokenizer::TiktokenTokenizer;
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptFetcher};
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything needed to turn a video ID into improved text.
///
/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn TranscriptFetcher>,
    chunker: TokenChunker,
    dispatcher: Dispatcher,
}

impl Pipeline {
    /// Assemble a pipeline from explicit parts.
    pub fn new(fetcher: Arc<dyn TranscriptFetcher>, chunker: TokenChunker, dispatcher: Dispatcher) -> Self {
        Self {
            fetcher,
            chunker,
            dispatcher,
        }
    }

    /// Build the production pipeline: YouTube captions, tiktoken sizing, OpenAI rewriting.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(settings.prompts.custom_dir.as_deref())?;

        let tokenizer = Arc::new(TiktokenTokenizer::for_model(&settings.completion.model)?);
        let chunker = TokenChunker::new(tokenizer, settings.completion.max_tokens_per_chunk);

        let completer = OpenAiCompleter::from_settings(&settings.completion)?
            .map(|c| Arc::new(c) as Arc<dyn Completer>);
        if completer.is_some() {
            info!("Rewriting transcripts with {}", settings.completion.model);
        }
        let dispatcher = Dispatcher::new(completer, &prompts.improve.system);

        let fetcher = Arc::new(YoutubeTranscriptFetcher::new(&settings.youtube)?);

        Ok(Self::new(fetcher, chunker, dispatcher))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Fetch and improve the transcript of `video_id`.
    ///
    /// A caption track without any text is a fetch failure.
    #[instrument(skip(self))]
    pub async fn process(&self, video_id: &str) -> Result<String> {
        let transcript = self.fetcher.fetch_text(video_id).await?;
        if transcript.trim().is_empty() {
            return Err(TubescribeError::NoTranscript(video_id.to_string()));
        }
        info!("Transcript for {} is {} chars", video_id, transcript.len());

        let chunks = self.chunker.chunk(&transcript);
        Ok(self.dispatcher.improve(chunks).await)
    }
}
