//! Completion service configuration from TOML (`[openai]` section)

use super::ConfigIssue;
use consult_application::GenerationParams;
use consult_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat-completion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can be overridden for Azure OpenAI or a local server).
    pub base_url: String,
    /// Model identifier (default: "gpt-3.5-turbo").
    pub model: Option<String>,
    /// Request timeout. Unset means the HTTP client default.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: None,
            timeout_seconds: None,
        }
    }
}

impl FileOpenAiConfig {
    /// Parse the configured model, reporting an issue for blank names.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.model.as_deref().map(str::trim) {
            None => (None, vec![]),
            Some("") => (
                None,
                vec![ConfigIssue::warning(
                    "openai.model",
                    "model name is empty, using the default",
                )],
            ),
            Some(name) => (name.parse().ok(), vec![]),
        }
    }

    /// Resolve the API key: explicit `api_key` first, then the environment variable.
    ///
    /// Empty values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Model as the use case consumes it. The temperature is not configurable.
    pub fn generation_params(&self) -> GenerationParams {
        let mut params = GenerationParams::default();
        if let (Some(model), _) = self.parse_model() {
            params = params.with_model(model);
        }
        params
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                "openai.timeout_seconds",
                "cannot be 0",
            ));
        }
        issues
    }
}
