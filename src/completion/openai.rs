//! OpenAI chat completion implementation.

use super::Completer;
use crate::config::CompletionSettings;
use crate::error::{Result, TubescribeError};
use crate::openai::create_client_with_timeout;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// OpenAI-backed completer.
pub struct OpenAiCompleter {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiCompleter {
    /// Create a completer from settings.
    ///
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_settings(settings: &CompletionSettings) -> Result<Option<Self>> {
        let Some(api_key) = settings.api_key.as_deref() else {
            return Ok(None);
        };

        Self::with_config(
            api_key,
            &settings.model,
            settings.temperature,
            Duration::from_secs(settings.timeout_secs),
        )
        .map(Some)
    }

    /// Create a completer with an explicit key, model, temperature and timeout.
    pub fn with_config(api_key: &str, model: &str, temperature: f32, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: create_client_with_timeout(api_key, timeout)?,
            model: model.to_string(),
            temperature,
        })
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    #[instrument(skip(self, system, user), fields(model = %self.model, chars = user.len()))]
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system.to_string())
                .build()
                .map_err(|e| TubescribeError::Completion(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user.to_string())
                .build()
                .map_err(|e| TubescribeError::Completion(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| TubescribeError::Completion(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| TubescribeError::OpenAI(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| TubescribeError::Completion("Empty response from model".to_string()))?;

        debug!("Received {} chars", content.len());
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
