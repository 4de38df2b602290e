//! Error types for the OpenAI adapter

use consult_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to the chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("API key is not set (expected environment variable {0})")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no choices")]
    NoChoices,

    #[error("Response message had no content")]
    EmptyContent,
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::MissingApiKey(env) => GatewayError::MissingCredential(env),
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_decode() => GatewayError::MalformedResponse(e.to_string()),
            OpenAiError::Http(e) => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Json(e) => GatewayError::MalformedResponse(e.to_string()),
            OpenAiError::Api { status, message } => GatewayError::Api { status, message },
            OpenAiError::NoChoices => {
                GatewayError::MalformedResponse("response contained no choices".to_string())
            }
            OpenAiError::EmptyContent => GatewayError::EmptyCompletion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_maps_to_missing_credential() {
        let err: GatewayError = OpenAiError::MissingApiKey("OPENAI_API_KEY".to_string()).into();
        assert!(matches!(err, GatewayError::MissingCredential(ref env) if env == "OPENAI_API_KEY"));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_api_error_keeps_status_and_message() {
        let err: GatewayError = OpenAiError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "API error (429): Rate limit reached");
    }

    #[test]
    fn test_json_error_is_malformed_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GatewayError = OpenAiError::Json(json_err).into();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_content_is_empty_completion() {
        let err: GatewayError = OpenAiError::EmptyContent.into();
        assert!(matches!(err, GatewayError::EmptyCompletion));
    }
}
