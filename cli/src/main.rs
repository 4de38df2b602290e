//! CLI entrypoint for expert-consult
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use consult_application::GenerateResponseUseCase;
use consult_domain::{Model, OutputFormat};
use consult_infrastructure::{
    ConfigLoader, FileConfig, IssueSeverity, OpenAiCompletionGateway, OpenAiSettings,
};
use consult_presentation::{
    Cli, ConsoleFormatter, ConsultationForm, FormResult, FormRunner, InteractiveRepl,
    OutputConfig, ReplConfig,
};
use dotenv::dotenv;
use std::io::{IsTerminal, Read};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the key may come from the real environment
    dotenv().ok();

    let cli = Cli::parse();
    let log_guard = init_logging(&cli)?;

    info!("Starting expert-consult");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    if cli.list_personas {
        println!("{}", ConsoleFormatter::persona_list(None));
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow::anyhow!(e.to_string()))
    .context("failed to load configuration")?;

    report_config_issues(&config)?;

    if cli.no_color || !config.output.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let mut params = config.openai.generation_params();
    if let Some(model) = &cli.model {
        if model.trim().is_empty() {
            bail!("--model cannot be empty");
        }
        params = params.with_model(Model::from(model.as_str()));
    }

    let settings = OpenAiSettings::from_config(&config.openai);
    if settings.api_key.is_none() {
        // Not fatal: the request fails and the error is shown as the answer
        warn!("No API key found in {}", settings.api_key_env);
    }
    let gateway = Arc::new(OpenAiCompletionGateway::new(settings)?);
    let use_case = GenerateResponseUseCase::new(gateway).with_params(params);

    let persona = cli
        .persona
        .or_else(|| config.consult.parse_default_persona().0)
        .unwrap_or_default();

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        decorations: !cli.quiet,
    };

    let runner = FormRunner::new(use_case).with_progress(!cli.quiet && config.repl.show_progress);

    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: !cli.quiet && config.repl.show_progress,
            history_file: config.repl.history_path(),
        };
        let mut repl = InteractiveRepl::new(runner, persona)
            .with_output(output)
            .with_config(repl_config);
        repl.run().await?;
        return Ok(());
    }

    let question = read_question(cli.question.as_deref())?;

    let show_decorations = output.decorations && output.format == OutputFormat::Text;
    if show_decorations {
        println!("{}", ConsoleFormatter::banner());
        println!("相談先: {}\n", persona.label());
    }

    let form = ConsultationForm::new(persona).with_input(question);
    let result = runner.submit(&form).await;

    println!("{}", ConsoleFormatter::format(&result, output.format));

    if show_decorations {
        println!("{}", ConsoleFormatter::footer());
    }

    // Empty input is a usage problem; a failed completion is not.
    if matches!(result, FormResult::Warning { .. }) {
        drop(log_guard);
        std::process::exit(2);
    }

    Ok(())
}

/// Initialize logging based on verbosity level, or RUST_LOG when set
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

/// Print config warnings; refuse to start on errors
fn report_config_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == IssueSeverity::Warning) {
        warn!("{}", issue);
        eprintln!("warning: {}", issue);
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == IssueSeverity::Error)
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Question from the argument, or from stdin for `-` or piped input.
///
/// An empty result is passed on as-is so the form can show its warning.
fn read_question(arg: Option<&str>) -> Result<String> {
    match arg {
        Some("-") => read_stdin(),
        Some(question) => Ok(question.to_string()),
        None if !std::io::stdin().is_terminal() => read_stdin(),
        None => bail!(
            "A question is required. Pass it as an argument, pipe it on stdin, or use --interactive."
        ),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read question from stdin")?;
    Ok(buf)
}
