//! Configuration file loading for expert-consult
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `EXPERT_CONSULT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./expert-consult.toml` or `./.expert-consult.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/expert-consult/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileConsultConfig, FileOpenAiConfig, FileOutputConfig,
    FileReplConfig, IssueSeverity,
};
pub use loader::ConfigLoader;
