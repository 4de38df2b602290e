//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown persona: '{0}' (expected one of: physician, lawyer, nutritionist)")]
    UnknownPersona(String),

    #[error("Question cannot be empty")]
    EmptyQuestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_persona_display() {
        let error = DomainError::UnknownPersona("dentist".to_string());
        assert!(error.to_string().contains("'dentist'"));
        assert!(error.to_string().contains("nutritionist"));
    }
}
