//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod consult;
mod openai;
mod output;
mod repl;

pub use consult::FileConsultConfig;
pub use openai::FileOpenAiConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub openai: FileOpenAiConfig,
    /// Consultation defaults
    pub consult: FileConsultConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive mode settings
    pub repl: FileReplConfig,
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// A problem found while validating [`FileConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: IssueSeverity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.openai.validate());
        issues.extend(self.consult.validate());
        issues
    }
}
