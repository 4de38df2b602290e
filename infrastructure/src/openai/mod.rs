//! OpenAI chat-completions adapter
//!
//! Implements the [`CompletionGateway`](consult_application::CompletionGateway)
//! port over `POST {base_url}/v1/chat/completions`.

pub mod error;
pub mod gateway;
pub mod protocol;
