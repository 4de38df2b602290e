//! Console output formatter for consultation results

use crate::form::FormResult;
use colored::Colorize;
use consult_domain::{ConsultationResponse, OutputFormat, Persona};

pub const APP_TITLE: &str = "専門家AI相談アプリ";

pub const SUCCESS_MESSAGE: &str = "回答が完了しました！";

pub const DISCLAIMER: &str =
    "※ このアプリはAIによる参考回答です。重要な決定には専門家への直接相談をお勧めします。";

/// Formats consultation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a form result in the requested format
    pub fn format(result: &FormResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(result),
            OutputFormat::Plain => Self::format_plain(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Status line, header and answer; errors replace the answer in red.
    pub fn format_text(result: &FormResult) -> String {
        match result {
            FormResult::Warning { message } => Self::warning(message),
            FormResult::Answered {
                persona, response, ..
            } => Self::answer(*persona, response),
        }
    }

    /// Only the response text (or the warning)
    pub fn format_plain(result: &FormResult) -> String {
        match result {
            FormResult::Warning { message } => message.clone(),
            FormResult::Answered { response, .. } => response.text.clone(),
        }
    }

    /// Format as JSON
    pub fn format_json(result: &FormResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Title and usage instructions
    pub fn banner() -> String {
        let line = "=".repeat(60);
        let mut output = format!("{}\n{}\n{}\n", line.cyan(), APP_TITLE.bold(), line.cyan());
        output.push_str("選択した専門家の立場からAIが回答します。\n\n");
        output.push_str(&format!("{}\n", "操作方法".cyan().bold()));
        output.push_str("  1. 専門家を選択: --persona で相談したい専門家を選んでください\n");
        output.push_str("  2. 質問を入力: 相談内容を入力してください\n");
        output.push_str("  3. 回答を取得: 選択した専門家の立場からAIが回答します\n");
        output
    }

    pub fn footer() -> String {
        format!("{}\n{}", "-".repeat(60).dimmed(), DISCLAIMER.dimmed())
    }

    /// `{label}からの回答`
    pub fn answer_header(persona: Persona) -> String {
        format!("{}からの回答", persona.label())
    }

    /// One line per persona, marking the selected one
    pub fn persona_list(selected: Option<Persona>) -> String {
        Persona::ALL
            .iter()
            .map(|p| {
                let marker = if Some(*p) == selected { "*" } else { " " };
                format!("{} {:<13} {}", marker, p.as_str(), p.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn answer(persona: Persona, response: &ConsultationResponse) -> String {
        let mut output = String::new();
        if response.is_error {
            output.push_str(&format!("{}\n\n", Self::answer_header(persona).bold()));
            output.push_str(&response.text.red().to_string());
        } else {
            output.push_str(&format!("{}\n\n", SUCCESS_MESSAGE.green()));
            output.push_str(&format!("{}\n\n", Self::answer_header(persona).yellow().bold()));
            output.push_str(&response.text);
        }
        output.push('\n');
        output
    }

    fn warning(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message.yellow())
    }
}
