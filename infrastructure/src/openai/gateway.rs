//! OpenAI completion gateway
//!
//! One `reqwest::Client` is built at construction and reused for every
//! request. The API key is resolved once at startup and injected here;
//! when it is missing, `complete` fails before touching the network.

use super::error::{OpenAiError, Result};
use super::protocol::{ChatCompletionRequest, parse_api_error, parse_completion};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use consult_application::{CompletionGateway, CompletionRequest, GatewayError};
use std::time::Duration;
use tracing::{debug, info};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Connection settings for [`OpenAiCompletionGateway`]
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    /// Name of the variable the key was expected in, for error messages
    pub api_key_env: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl OpenAiSettings {
    /// Resolve settings from the `[openai]` config section and the environment
    pub fn from_config(config: &FileOpenAiConfig) -> Self {
        Self {
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }
}

// Manual impl so the key never ends up in logs
impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// [`CompletionGateway`] backed by an OpenAI-compatible HTTP API
pub struct OpenAiCompletionGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiCompletionGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(
            base_url = %settings.base_url,
            has_api_key = settings.api_key.is_some(),
            "OpenAI gateway initialized"
        );

        Ok(Self { client, settings })
    }

    /// Full URL of the chat-completions endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| OpenAiError::MissingApiKey(self.settings.api_key_env.clone()))?;

        let body = ChatCompletionRequest::from(request);
        debug!(
            model = body.model,
            messages = body.messages.len(),
            "POST {}",
            self.endpoint()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &text));
        }

        parse_completion(&text)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, GatewayError> {
        self.send(request).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{Message, Model};

    fn settings(api_key: Option<&str>) -> OpenAiSettings {
        OpenAiSettings {
            api_key: api_key.map(str::to_string),
            api_key_env: "OPENAI_API_KEY".to_string(),
            // Unroutable, so an accidental request fails instead of reaching a server
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout: Some(Duration::from_secs(1)),
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: Model::default(),
            temperature: 0.7,
            messages: vec![Message::system("instruction"), Message::user("question")],
        }
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let gateway = OpenAiCompletionGateway::new(settings(Some("sk-test"))).unwrap();
        assert_eq!(gateway.endpoint(), "http://127.0.0.1:9/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let gateway = OpenAiCompletionGateway::new(settings(None)).unwrap();

        let err = gateway.complete(&request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::MissingCredential(ref env) if env == "OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let gateway = OpenAiCompletionGateway::new(settings(Some("sk-test"))).unwrap();

        let err = gateway.complete(&request()).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::Timeout
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", settings(Some("sk-secret-value")));
        assert!(!rendered.contains("sk-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_settings_from_config() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-from-config".to_string()),
            base_url: "https://example.test".to_string(),
            timeout_seconds: Some(15),
            ..Default::default()
        };
        let settings = OpenAiSettings::from_config(&config);
        assert_eq!(settings.api_key.as_deref(), Some("sk-from-config"));
        assert_eq!(settings.base_url, "https://example.test");
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
    }
}
