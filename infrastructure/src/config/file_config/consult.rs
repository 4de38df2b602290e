//! Consultation defaults from TOML (`[consult]` section)

use super::ConfigIssue;
use consult_domain::Persona;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsultConfig {
    /// Persona selected when none is given on the command line
    pub default_persona: Option<String>,
}

impl FileConsultConfig {
    pub fn parse_default_persona(&self) -> (Option<Persona>, Vec<ConfigIssue>) {
        match &self.default_persona {
            None => (None, vec![]),
            Some(raw) => match raw.parse::<Persona>() {
                Ok(persona) => (Some(persona), vec![]),
                Err(e) => (
                    None,
                    vec![ConfigIssue::warning(
                        "consult.default_persona",
                        format!("{}, falling back to '{}'", e, Persona::default().as_str()),
                    )],
                ),
            },
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        self.parse_default_persona().1
    }
}
