//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the chat-completion model identifier
//! - [`question::Question`]: a validated question to pose to an expert
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
