//! Configuration settings for Tubescribe.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the OpenAI API key.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable holding the shared secret for `POST /transcribe`.
pub const ENV_AUTH_TOKEN: &str = "TUBESCRIBE_AUTH_TOKEN";
/// Environment variable holding the proxy used for transcript retrieval.
pub const ENV_PROXY: &str = "TUBESCRIBE_PROXY";
/// Environment variable overriding the completion model.
pub const ENV_MODEL: &str = "TUBESCRIBE_MODEL";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub completion: CompletionSettings,
    pub youtube: YoutubeSettings,
    pub prompts: PromptSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Shared secret required by `POST /transcribe`. Requests are rejected when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            auth_token: None,
        }
    }
}

/// Completion service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Chat model used to rewrite transcript chunks. Also selects the tokenizer.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Token budget for a single chunk sent to the model.
    pub max_tokens_per_chunk: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// API key. Only ever read from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            max_tokens_per_chunk: 16000,
            timeout_secs: crate::openai::DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

/// YouTube caption retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// HTTP(S) proxy used for every request to YouTube.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Caption language preference, most preferred first.
    pub languages: Vec<String>,
    /// Timeout for each request to YouTube, in seconds.
    pub timeout_secs: u64,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            proxy: None,
            languages: vec!["en".to_string()],
            timeout_secs: 30,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
}

impl Settings {
    /// Load settings from the default configuration file and the environment.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// Environment overrides are applied on top of whatever the file provides.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Settings::default()
        };

        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// Empty values are treated as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.completion.api_key = Some(key);
        }
        if let Some(token) = get(ENV_AUTH_TOKEN) {
            self.server.auth_token = Some(token);
        }
        if let Some(proxy) = get(ENV_PROXY).or_else(|| get("HTTPS_PROXY")) {
            self.youtube.proxy = Some(proxy);
        }
        if let Some(model) = get(ENV_MODEL) {
            self.completion.model = model;
        }
    }

    /// Save settings to a specific path.
    ///
    /// Secrets sourced from the environment are left out of the file.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut persisted = self.clone();
        persisted.server.auth_token = None;
        let content = toml::to_string_pretty(&persisted)
            .map_err(|e| crate::error::TubescribeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubescribe")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Whether an OpenAI API key is available.
    pub fn has_api_key(&self) -> bool {
        self.completion.api_key.is_some()
    }
}
