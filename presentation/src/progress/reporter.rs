//! Progress reporting for a consultation

use colored::Colorize;
use consult_application::ConsultationNotifier;
use consult_domain::{ConsultationResponse, Persona};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner text while waiting, e.g. `医師が回答を準備中...`
pub fn waiting_message(persona: Persona) -> String {
    format!("{}が回答を準備中...", persona.label())
}

/// Shows an indicatif spinner for the duration of the request
pub struct SpinnerReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultationNotifier for SpinnerReporter {
    fn on_request_start(&self, persona: Persona) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(waiting_message(persona));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _persona: Persona, _response: &ConsultationResponse) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner), written to stderr
pub struct SimpleProgress;

impl ConsultationNotifier for SimpleProgress {
    fn on_request_start(&self, persona: Persona) {
        eprintln!("{} {}", "->".cyan(), waiting_message(persona));
    }

    fn on_request_complete(&self, _persona: Persona, response: &ConsultationResponse) {
        if response.is_error {
            eprintln!("  {} failed", "x".red());
        } else {
            eprintln!("  {} done", "v".green());
        }
    }
}
