//! Presentation layer for expert-consult
//!
//! This crate contains the CLI definition, the consultation form,
//! output formatters, the progress spinner and the interactive mode.

pub mod cli;
pub mod config;
pub mod form;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use form::{ConsultationForm, FormOutcome, FormResult, FormRunner};
pub use interactive::InteractiveRepl;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, SpinnerReporter};
