//! Completion gateway port
//!
//! Defines the interface for calling a chat-completion service.

use async_trait::async_trait;
use consult_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API key is not set (expected environment variable {0})")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Completion contained no text")]
    EmptyCompletion,
}

/// A single chat-completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub temperature: f32,
    pub messages: Vec<Message>,
}

/// Gateway for chat-completion calls
///
/// This port defines how the application layer talks to the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the request and return the completion text as received
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
