//! Domain layer for expert-consult
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Persona
//!
//! A consultation is always answered "as" one of three fixed experts:
//!
//! - **Physician** (医師)
//! - **Lawyer** (弁護士)
//! - **Nutritionist** (栄養士)
//!
//! Each persona maps to a fixed instruction text that is sent to the model
//! as the system message, ahead of the user's own question.
//!
//! ## Consultation
//!
//! A [`ConsultationRequest`] pairs a persona with a validated [`Question`].
//! A [`ConsultationResponse`] carries the text to display, which is either the
//! model's answer or a human-readable error message.

pub mod config;
pub mod consultation;
pub mod core;
pub mod persona;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use consultation::{ConsultationRequest, ConsultationResponse};
pub use core::{error::DomainError, model::Model, question::Question};
pub use persona::Persona;
pub use prompt::PromptTemplate;
pub use session::entities::{Message, MessageRole};
