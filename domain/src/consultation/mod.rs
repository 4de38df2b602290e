//! Consultation request and response entities

use crate::core::question::Question;
use crate::persona::Persona;
use serde::{Deserialize, Serialize};

/// One question addressed to one persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub persona: Persona,
    pub question: Question,
}

impl ConsultationRequest {
    pub fn new(persona: Persona, question: Question) -> Self {
        Self { persona, question }
    }
}

/// Text to display for a consultation
///
/// `text` is either the model's answer, unmodified, or a human-readable
/// error message. `is_error` lets the presentation layer style the two
/// differently; it never changes the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationResponse {
    pub text: String,
    pub is_error: bool,
}

impl ConsultationResponse {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl std::fmt::Display for ConsultationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
