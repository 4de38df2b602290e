//! The consultation form: persona selector, question input, submit.
//!
//! Empty or whitespace-only input never reaches the generator; the form
//! produces a warning instead.

use crate::progress::reporter::{SimpleProgress, SpinnerReporter};
use consult_application::{GenerateResponseUseCase, NoProgress};
use consult_domain::{ConsultationRequest, ConsultationResponse, Persona, Question};
use serde::Serialize;
use std::io::IsTerminal;
use tracing::debug;

/// Shown instead of an answer when the question is empty.
pub const EMPTY_INPUT_WARNING: &str = "相談内容を入力してください。";

/// Result of validating the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Ready(ConsultationRequest),
    Warning(&'static str),
}

/// Current state of the form
#[derive(Debug, Clone, Default)]
pub struct ConsultationForm {
    persona: Persona,
    input: String,
}

impl ConsultationForm {
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            input: String::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = persona;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Validate the input and build the request
    pub fn submit(&self) -> FormOutcome {
        match Question::try_new(self.input.clone()) {
            Some(question) => FormOutcome::Ready(ConsultationRequest::new(self.persona, question)),
            None => FormOutcome::Warning(EMPTY_INPUT_WARNING),
        }
    }
}

/// What the user sees after pressing submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormResult {
    Warning {
        message: String,
    },
    Answered {
        persona: Persona,
        question: String,
        response: ConsultationResponse,
    },
}

/// Submits forms to the response generator
pub struct FormRunner {
    use_case: GenerateResponseUseCase,
    show_progress: bool,
}

impl FormRunner {
    pub fn new(use_case: GenerateResponseUseCase) -> Self {
        Self {
            use_case,
            show_progress: true,
        }
    }

    /// Set whether to show a spinner while waiting
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Validate the form and, if it is valid, ask the selected persona.
    pub async fn submit(&self, form: &ConsultationForm) -> FormResult {
        let request = match form.submit() {
            FormOutcome::Ready(request) => request,
            FormOutcome::Warning(message) => {
                debug!("Form rejected: {}", message);
                return FormResult::Warning {
                    message: message.to_string(),
                };
            }
        };

        let response = if self.show_progress && std::io::stderr().is_terminal() {
            let progress = SpinnerReporter::new();
            self.use_case.execute_with_progress(&request, &progress).await
        } else if self.show_progress {
            self.use_case.execute_with_progress(&request, &SimpleProgress).await
        } else {
            self.use_case.execute_with_progress(&request, &NoProgress).await
        };

        FormResult::Answered {
            persona: request.persona,
            question: request.question.into_content(),
            response,
        }
    }
}
