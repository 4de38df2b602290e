//! Progress notification port
//!
//! Lets the presentation layer show a spinner while the model is answering.

use consult_domain::{ConsultationResponse, Persona};

/// Callback for progress updates during a consultation
pub trait ConsultationNotifier: Send + Sync {
    /// Called right before the completion request is sent
    fn on_request_start(&self, persona: Persona);

    /// Called once the response (answer or error text) is available
    fn on_request_complete(&self, persona: Persona, response: &ConsultationResponse);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConsultationNotifier for NoProgress {
    fn on_request_start(&self, _persona: Persona) {}
    fn on_request_complete(&self, _persona: Persona, _response: &ConsultationResponse) {}
}
