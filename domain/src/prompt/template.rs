//! Prompt templates for a consultation

use crate::consultation::ConsultationRequest;
use crate::session::entities::Message;

/// Builds the message list sent to the completion service
pub struct PromptTemplate;

impl PromptTemplate {
    /// Two messages, in order: the persona instruction, then the question verbatim.
    pub fn consultation_messages(request: &ConsultationRequest) -> Vec<Message> {
        vec![
            Message::system(request.persona.instruction()),
            Message::user(request.question.content()),
        ]
    }
}
