//! Interactive mode: one independent consultation per prompt
//!
//! Nothing carries over between questions except the selected persona.

use crate::config::{OutputConfig, ReplConfig};
use crate::form::{ConsultationForm, FormRunner};
use crate::output::console::ConsoleFormatter;
use consult_domain::Persona;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// A parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Ask(String),
    SwitchPersona(Persona),
    InvalidPersona(String),
    ListPersonas,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse one complete input. Anything not starting with `/` is a question.
    ///
    /// A leading `//` escapes the slash: `//etc/hosts とは？` asks `/etc/hosts とは？`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(rest) = input.trim_start().strip_prefix("//") {
            return ReplCommand::Ask(format!("/{}", rest));
        }
        if !trimmed.starts_with('/') {
            return ReplCommand::Ask(input.to_string());
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        match command {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/personas" => ReplCommand::ListPersonas,
            "/persona" | "/p" if arg.is_empty() => ReplCommand::ListPersonas,
            "/persona" | "/p" => match arg.parse::<Persona>() {
                Ok(persona) => ReplCommand::SwitchPersona(persona),
                Err(e) => ReplCommand::InvalidPersona(e.to_string()),
            },
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

/// One physical line of input, after continuation handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// Line ended with a single `\`; the question goes on
    Continue(String),
    /// Last line of the question
    Done(String),
}

impl InputLine {
    /// A trailing `\` continues the question; a trailing `\\` is one literal `\`.
    pub fn classify(line: String) -> Self {
        if let Some(head) = line.strip_suffix("\\\\") {
            return InputLine::Done(format!("{}\\", head));
        }
        match line.strip_suffix('\\') {
            Some(head) => InputLine::Continue(head.to_string()),
            None => InputLine::Done(line),
        }
    }
}

/// Interactive consultation loop
pub struct InteractiveRepl {
    runner: FormRunner,
    form: ConsultationForm,
    output: OutputConfig,
    config: ReplConfig,
}

impl InteractiveRepl {
    pub fn new(runner: FormRunner, persona: Persona) -> Self {
        Self {
            runner,
            form: ConsultationForm::new(persona),
            output: OutputConfig::default(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.runner = self.runner.with_progress(config.show_progress);
        self.config = config;
        self
    }

    /// Run the interactive loop until /quit or EOF
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let input = match Self::read_question(&mut rl, &self.prompt()) {
                Ok(input) => input,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            };

            if !input.trim().is_empty() {
                let _ = rl.add_history_entry(input.as_str());
            }

            match ReplCommand::parse(&input) {
                ReplCommand::Quit => {
                    println!("Bye!");
                    break;
                }
                ReplCommand::Help => self.print_help(),
                ReplCommand::ListPersonas => {
                    println!();
                    println!("{}", ConsoleFormatter::persona_list(Some(self.form.persona())));
                    println!();
                }
                ReplCommand::SwitchPersona(persona) => {
                    debug!("Persona switched to {}", persona.as_str());
                    self.form.set_persona(persona);
                    println!("相談先: {}", persona.label());
                }
                ReplCommand::InvalidPersona(message) => eprintln!("{}", message),
                ReplCommand::Unknown(cmd) => {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                }
                ReplCommand::Ask(question) => self.process_question(question).await,
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Read one question; a trailing `\` continues it on the next line.
    fn read_question(rl: &mut DefaultEditor, prompt: &str) -> RlResult<String> {
        let mut lines = Vec::new();
        let mut current_prompt = prompt.to_string();
        loop {
            match InputLine::classify(rl.readline(&current_prompt)?) {
                InputLine::Continue(head) => {
                    lines.push(head);
                    current_prompt = "... ".to_string();
                }
                InputLine::Done(last) => {
                    lines.push(last);
                    return Ok(lines.join("\n"));
                }
            }
        }
    }

    fn prompt(&self) -> String {
        format!("{}> ", self.form.persona().label())
    }

    async fn process_question(&mut self, question: String) {
        self.form.set_input(question);
        let result = self.runner.submit(&self.form).await;
        println!();
        println!("{}", ConsoleFormatter::format(&result, self.output.format));
    }

    fn print_welcome(&self) {
        if self.output.decorations {
            println!("{}", ConsoleFormatter::banner());
        }
        println!("相談先: {}", self.form.persona().label());
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /persona <name>  - Switch expert (physician, lawyer, nutritionist)");
        println!("  /personas        - List experts");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit");
        println!();
        println!("End a line with \\ to continue the question on the next line (\\\\ for a literal \\).");
        println!("Start with // to ask a question that begins with /.");
        println!();
        if self.output.decorations {
            println!("{}", ConsoleFormatter::footer());
            println!();
        }
    }
}
