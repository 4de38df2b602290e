//! Presentation-level configuration
//!
//! Resolved by the binary from CLI flags and the loaded config file.

use consult_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the banner and the disclaimer footer
    pub decorations: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            decorations: true,
        }
    }
}

/// Interactive mode configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting for an answer
    pub show_progress: bool,
    /// Path to history file; the platform data directory is used when unset
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("expert-consult").join("history.txt"))
        })
    }
}
