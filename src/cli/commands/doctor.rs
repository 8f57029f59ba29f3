//! Doctor command - verify configuration before serving.

use crate::cli::{mask_secret, Output};
use crate::config::{Settings, ENV_API_KEY, ENV_AUTH_TOKEN};
use crate::tokenizer::{TiktokenTokenizer, Tokenizer};
use crate::transcript::YoutubeTranscriptFetcher;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Tubescribe Doctor");
    println!();

    let sections = [
        ("Credentials", vec![check_api_key(settings), check_auth_token(settings)]),
        ("Completion", vec![check_tokenizer(settings), check_chunk_budget(settings)]),
        ("Transcripts", vec![check_proxy(settings)]),
        ("Configuration", vec![check_config_file()]),
    ];

    let mut errors = 0;
    let mut warnings = 0;
    for (title, checks) in &sections {
        println!("{}", style(title).bold());
        for check in checks {
            check.print();
            match check.status {
                CheckStatus::Error => errors += 1,
                CheckStatus::Warning => warnings += 1,
                CheckStatus::Ok => {}
            }
        }
        println!();
    }

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before serving.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Tubescribe is ready to serve.");
    }

    Ok(())
}

/// Missing key is a warning: the server still runs and returns a placeholder.
fn check_api_key(settings: &Settings) -> CheckResult {
    match settings.completion.api_key.as_deref() {
        Some(key) if key.starts_with("sk-") => {
            CheckResult::ok(ENV_API_KEY, &format!("configured ({})", mask_secret(key)))
        }
        Some(_) => CheckResult::warning(
            ENV_API_KEY,
            "set but format looks unusual",
            "Expected format: sk-... (OpenAI API key)",
        ),
        None => CheckResult::warning(
            ENV_API_KEY,
            "not set, transcripts will not be improved",
            "Set with: export OPENAI_API_KEY='sk-...'",
        ),
    }
}

fn check_auth_token(settings: &Settings) -> CheckResult {
    match settings.server.auth_token.as_deref() {
        Some(token) if token.len() >= 16 => CheckResult::ok(ENV_AUTH_TOKEN, "configured"),
        Some(_) => CheckResult::warning(
            ENV_AUTH_TOKEN,
            "configured but short",
            "Use at least 16 random characters",
        ),
        None => CheckResult::warning(
            ENV_AUTH_TOKEN,
            "not set, POST /transcribe is locked",
            "Set with: export TUBESCRIBE_AUTH_TOKEN='...'",
        ),
    }
}

fn check_tokenizer(settings: &Settings) -> CheckResult {
    match TiktokenTokenizer::for_model(&settings.completion.model) {
        Ok(tokenizer) => CheckResult::ok(
            "Tokenizer",
            &format!("{} (model {})", tokenizer.name(), settings.completion.model),
        ),
        Err(e) => CheckResult::error("Tokenizer", &e.to_string(), "Check completion.model in the config file"),
    }
}

fn check_chunk_budget(settings: &Settings) -> CheckResult {
    let max = settings.completion.max_tokens_per_chunk;
    if max == 0 {
        CheckResult::error(
            "Chunk budget",
            "max_tokens_per_chunk is 0",
            "Set completion.max_tokens_per_chunk to a positive value",
        )
    } else {
        CheckResult::ok("Chunk budget", &format!("{} tokens per chunk", max))
    }
}

fn check_proxy(settings: &Settings) -> CheckResult {
    match &settings.youtube.proxy {
        None => CheckResult::ok("Proxy", "not configured (direct connection)"),
        Some(_) => match YoutubeTranscriptFetcher::new(&settings.youtube) {
            Ok(_) => CheckResult::ok("Proxy", "configured"),
            Err(e) => CheckResult::error("Proxy", &e.to_string(), "Set TUBESCRIBE_PROXY to http://host:port"),
        },
    }
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: tubescribe config init",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }

    #[test]
    fn test_missing_api_key_is_warning() {
        let settings = Settings::default();
        assert_eq!(check_api_key(&settings).status, CheckStatus::Warning);
        assert_eq!(check_auth_token(&settings).status, CheckStatus::Warning);
    }

    #[test]
    fn test_configured_credentials() {
        let mut settings = Settings::default();
        settings.completion.api_key = Some("sk-proj-abcdefghijklmnop".to_string());
        settings.server.auth_token = Some("0123456789abcdef".to_string());

        let api = check_api_key(&settings);
        assert_eq!(api.status, CheckStatus::Ok);
        assert!(!api.message.contains("abcdefghijkl"));
        assert_eq!(check_auth_token(&settings).status, CheckStatus::Ok);
    }

    #[test]
    fn test_zero_chunk_budget() {
        let mut settings = Settings::default();
        settings.completion.max_tokens_per_chunk = 0;
        assert_eq!(check_chunk_budget(&settings).status, CheckStatus::Error);
        assert_eq!(check_tokenizer(&settings).status, CheckStatus::Ok);
    }
}
