//! Generate Response use case.
//!
//! Turns a [`ConsultationRequest`] into the text shown to the user:
//!
//! 1. Resolve the persona to its instruction text
//! 2. Build the two-message prompt (instruction, then the question verbatim)
//! 3. Send one completion request with the configured model at temperature 0.7
//! 4. Return the completion text unchanged
//!
//! [`GenerateResponseUseCase::execute`] returns an explicit `Result`.
//! [`GenerateResponseUseCase::generate`] folds failures into a displayable
//! message and never fails. There is no retry.

use crate::config::GenerationParams;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::progress::ConsultationNotifier;
use consult_domain::util::log_preview;
use consult_domain::{ConsultationRequest, ConsultationResponse, PromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Prefix of every user-facing error message.
pub const ERROR_PREFIX: &str = "エラーが発生しました: ";

/// Errors that can occur while generating a response.
#[derive(Error, Debug)]
pub enum GenerateResponseError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl GenerateResponseError {
    /// Render the error the way it is shown in place of an answer.
    pub fn user_message(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self)
    }
}

/// Use case for answering a consultation.
pub struct GenerateResponseUseCase {
    gateway: Arc<dyn CompletionGateway>,
    params: GenerationParams,
}

impl Clone for GenerateResponseUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            params: self.params.clone(),
        }
    }
}

impl GenerateResponseUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            gateway,
            params: GenerationParams::default(),
        }
    }

    /// Replace the default model.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Assemble the completion request without sending it.
    pub fn build_request(&self, request: &ConsultationRequest) -> CompletionRequest {
        CompletionRequest {
            model: self.params.model.clone(),
            temperature: self.params.temperature(),
            messages: PromptTemplate::consultation_messages(request),
        }
    }

    /// Send the consultation and return the completion text, or the failure.
    pub async fn execute(
        &self,
        request: &ConsultationRequest,
    ) -> Result<ConsultationResponse, GenerateResponseError> {
        info!(
            persona = request.persona.as_str(),
            model = %self.params.model,
            "Generating response: {}",
            log_preview(request.question.content(), 80)
        );

        let completion = self.build_request(request);
        let text = self.gateway.complete(&completion).await?;

        debug!("Completion received ({} bytes)", text.len());
        Ok(ConsultationResponse::answer(text))
    }

    /// Send the consultation; failures come back as `エラーが発生しました: ...` text.
    pub async fn generate(&self, request: &ConsultationRequest) -> ConsultationResponse {
        match self.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(persona = request.persona.as_str(), "Completion failed: {}", e);
                ConsultationResponse::error(e.user_message())
            }
        }
    }

    /// Same as [`generate`](Self::generate), with progress callbacks around the call.
    pub async fn execute_with_progress(
        &self,
        request: &ConsultationRequest,
        progress: &dyn ConsultationNotifier,
    ) -> ConsultationResponse {
        progress.on_request_start(request.persona);
        let response = self.generate(request).await;
        progress.on_request_complete(request.persona, &response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use consult_domain::{MessageRole, Model, Persona, Question};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Returns a fixed text and records every request it receives.
    struct StubGateway {
        reply: String,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl StubGateway {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionGateway for StubGateway {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl CompletionGateway for FailingGateway {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, GatewayError> {
            Err(GatewayError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ConsultationNotifier for RecordingProgress {
        fn on_request_start(&self, persona: Persona) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", persona.as_str()));
        }

        fn on_request_complete(&self, persona: Persona, response: &ConsultationResponse) {
            self.events.lock().unwrap().push(format!(
                "complete:{}:{}",
                persona.as_str(),
                response.is_error
            ));
        }
    }

    fn request(persona: Persona, text: &str) -> ConsultationRequest {
        ConsultationRequest::new(persona, Question::new(text).unwrap())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_request_has_instruction_then_question_for_every_persona() {
        for persona in Persona::ALL {
            let gateway = Arc::new(StubGateway::new("OK"));
            let use_case = GenerateResponseUseCase::new(gateway.clone());

            use_case.generate(&request(persona, "食事の相談です")).await;

            let sent = gateway.requests();
            assert_eq!(sent.len(), 1);
            let messages = &sent[0].messages;
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, MessageRole::System);
            assert_eq!(messages[0].content, persona.instruction());
            assert_eq!(messages[1].role, MessageRole::User);
            assert_eq!(messages[1].content, "食事の相談です");
        }
    }

    #[tokio::test]
    async fn test_returns_stub_reply_for_every_persona() {
        let gateway = Arc::new(StubGateway::new("OK"));
        let use_case = GenerateResponseUseCase::new(gateway);

        for persona in Persona::ALL {
            let response = use_case.generate(&request(persona, "hello")).await;
            assert_eq!(response.text, "OK");
            assert!(!response.is_error);
        }
    }

    #[tokio::test]
    async fn test_physician_headache_scenario() {
        let gateway = Arc::new(StubGateway::new("See a doctor for persistent headaches."));
        let use_case = GenerateResponseUseCase::new(gateway);

        let response = use_case
            .generate(&request(Persona::Physician, "I have a headache"))
            .await;

        assert_eq!(response.text, "See a doctor for persistent headaches.");
    }

    #[tokio::test]
    async fn test_failure_becomes_error_text() {
        let use_case = GenerateResponseUseCase::new(Arc::new(FailingGateway));

        let response = use_case
            .generate(&request(Persona::Lawyer, "相続について"))
            .await;

        assert!(response.is_error);
        assert!(response.text.starts_with("エラーが発生しました: "));
        assert!(response.text.contains("Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_execute_surfaces_gateway_error() {
        let use_case = GenerateResponseUseCase::new(Arc::new(FailingGateway));

        let result = use_case
            .execute(&request(Persona::Nutritionist, "減量したい"))
            .await;

        assert!(matches!(
            result,
            Err(GenerateResponseError::Gateway(GatewayError::Api { status: 401, .. }))
        ));
    }

    #[tokio::test]
    async fn test_uses_default_model_and_temperature() {
        let gateway = Arc::new(StubGateway::new("OK"));
        let use_case = GenerateResponseUseCase::new(gateway.clone());

        use_case.generate(&request(Persona::Physician, "q")).await;

        let sent = gateway.requests();
        assert_eq!(sent[0].model, Model::Gpt35Turbo);
        assert_eq!(sent[0].temperature, 0.7);
    }

    #[tokio::test]
    async fn test_with_params_overrides_model() {
        let gateway = Arc::new(StubGateway::new("OK"));
        let use_case = GenerateResponseUseCase::new(gateway.clone())
            .with_params(GenerationParams::default().with_model(Model::Gpt4o));

        use_case.generate(&request(Persona::Physician, "q")).await;

        let sent = gateway.requests();
        assert_eq!(sent[0].model, Model::Gpt4o);
        assert_eq!(sent[0].temperature, 0.7);
    }

    #[tokio::test]
    async fn test_answer_text_is_not_post_processed() {
        let reply = "  line 1\n\nline 2  \n";
        let use_case = GenerateResponseUseCase::new(Arc::new(StubGateway::new(reply)));

        let response = use_case.generate(&request(Persona::Lawyer, "q")).await;

        assert_eq!(response.text, reply);
    }

    #[tokio::test]
    async fn test_progress_callbacks_wrap_the_call() {
        let use_case = GenerateResponseUseCase::new(Arc::new(FailingGateway));
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(&request(Persona::Nutritionist, "q"), &progress)
            .await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["start:nutritionist", "complete:nutritionist:true"]
        );
    }

    #[tokio::test]
    async fn test_no_progress_still_returns_response() {
        let use_case = GenerateResponseUseCase::new(Arc::new(StubGateway::new("OK")));
        let response = use_case
            .execute_with_progress(&request(Persona::Physician, "q"), &NoProgress)
            .await;
        assert_eq!(response.text, "OK");
    }
}
