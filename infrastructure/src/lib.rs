//! Infrastructure layer for expert-consult
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileConsultConfig, FileOpenAiConfig,
    FileOutputConfig, FileReplConfig, IssueSeverity,
};
pub use openai::{
    error::{OpenAiError, Result},
    gateway::{OpenAiCompletionGateway, OpenAiSettings},
};
