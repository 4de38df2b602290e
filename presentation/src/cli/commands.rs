//! CLI command definitions

use clap::{Parser, ValueEnum};
use consult_domain::Persona;
use std::path::PathBuf;

/// Output format for consultation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer with header, status line and disclaimer
    Text,
    /// Only the answer text
    Plain,
    /// JSON object with persona, question and response
    Json,
}

impl From<OutputFormat> for consult_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => consult_domain::OutputFormat::Text,
            OutputFormat::Plain => consult_domain::OutputFormat::Plain,
            OutputFormat::Json => consult_domain::OutputFormat::Json,
        }
    }
}

/// Parse a persona name for clap, rejecting anything unknown.
pub fn parse_persona(s: &str) -> Result<Persona, String> {
    s.parse::<Persona>().map_err(|e| e.to_string())
}

/// CLI arguments for expert-consult
#[derive(Parser, Debug)]
#[command(name = "expert-consult")]
#[command(author, version, about = "専門家AI相談 - Ask a physician, lawyer or nutritionist persona")]
#[command(long_about = r#"
expert-consult answers your question from the standpoint of the selected expert.

1. Choose an expert with --persona (physician / lawyer / nutritionist, or 医師 / 弁護士 / 栄養士)
2. Pass your question as an argument, through stdin, or start --interactive mode
3. The answer from the selected expert is printed below the question

The API key is read from OPENAI_API_KEY (a .env file in the current directory is loaded too).

Configuration files are loaded from (in priority order):
1. EXPERT_CONSULT_<SECTION>__<KEY>        Environment overrides
2. --config <path>                        Explicit config file
3. ./expert-consult.toml                  Project-level config
4. ~/.config/expert-consult/config.toml   Global config

Example:
  expert-consult --persona physician "頭痛が3日続いています"
  echo "契約書の読み方を教えてください" | expert-consult -p lawyer -
  expert-consult --interactive -p 栄養士
"#)]
pub struct Cli {
    /// The question to ask ("-" reads it from stdin)
    pub question: Option<String>,

    /// Expert to consult
    #[arg(short, long, value_name = "PERSONA", value_parser = parse_persona)]
    pub persona: Option<Persona>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Model to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List available personas and exit
    #[arg(long)]
    pub list_personas: bool,
}
