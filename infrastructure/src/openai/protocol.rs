//! Wire types for the chat-completions API
//!
//! Only the fields this adapter reads or writes are modelled; unknown
//! response fields are ignored.

use super::error::{OpenAiError, Result};
use consult_application::CompletionRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for `POST /v1/chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            temperature: request.temperature,
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// `{"error": {"message": ..., "type": ...}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Extract `choices[0].message.content` from a successful response body.
pub fn parse_completion(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;
    debug!(
        model = response.model.as_deref().unwrap_or("unknown"),
        choices = response.choices.len(),
        "Parsed chat completion"
    );
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(OpenAiError::NoChoices)?;
    if let Some(reason) = choice.finish_reason.as_deref().filter(|r| *r != "stop") {
        debug!(finish_reason = reason, "Completion did not finish normally");
    }
    choice.message.content.ok_or(OpenAiError::EmptyContent)
}

/// Build an [`OpenAiError::Api`] from a non-2xx response.
///
/// Uses the error envelope's message when the body has one, the raw body
/// otherwise.
pub fn parse_api_error(status: u16, body: &str) -> OpenAiError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            debug!(kind = envelope.error.kind.as_deref().unwrap_or("unknown"), "API error");
            envelope.error.message
        }
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    OpenAiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{Message, Model};

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            model: Model::Gpt35Turbo,
            temperature: 0.7,
            messages: vec![Message::system("instruction"), Message::user("question")],
        };

        let body = serde_json::to_value(ChatCompletionRequest::from(&request)).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "instruction");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "question");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_completion_takes_first_choice() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-3.5-turbo-0125",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "See a doctor."}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;

        assert_eq!(parse_completion(body).unwrap(), "See a doctor.");
    }

    #[test]
    fn test_parse_completion_no_choices() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, OpenAiError::NoChoices));
    }

    #[test]
    fn test_parse_completion_null_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(matches!(
            parse_completion(body).unwrap_err(),
            OpenAiError::EmptyContent
        ));
    }

    #[test]
    fn test_parse_completion_not_json() {
        assert!(matches!(
            parse_completion("<html>Bad Gateway</html>").unwrap_err(),
            OpenAiError::Json(_)
        ));
    }

    #[test]
    fn test_parse_api_error_envelope() {
        let body = r#"{"error": {"message": "Incorrect API key provided: sk-xxx.", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        match parse_api_error(401, body) {
            OpenAiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided: sk-xxx.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_api_error_raw_body() {
        match parse_api_error(502, "  upstream unavailable \n") {
            OpenAiError::Api { message, .. } => assert_eq!(message, "upstream unavailable"),
            other => panic!("unexpected error: {other:?}"),
        }
        match parse_api_error(500, "") {
            OpenAiError::Api { message, .. } => assert_eq!(message, "empty response body"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
