//! Application layer for expert-consult
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{ConsultationNotifier, NoProgress},
};
pub use use_cases::generate_response::{
    ERROR_PREFIX, GenerateResponseError, GenerateResponseUseCase,
};
