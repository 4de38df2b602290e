//! Expert personas
//!
//! A [`Persona`] decides which instruction text conditions the model's
//! answer. The mapping is an exhaustive `match`, so every persona always
//! has an instruction and there is no "unset" state to send by accident.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

const PHYSICIAN_INSTRUCTION: &str = "あなたは経験豊富な医師です。患者からの相談に対して、医学的知識に基づいた適切なアドバイスを提供してください。ただし、最終的には医療機関での診察を勧めることも忘れずに。";

const LAWYER_INSTRUCTION: &str = "あなたは経験豊富な弁護士です。法的な相談に対して、関連する法律や判例に基づいた適切なアドバイスを提供してください。ただし、具体的な法的判断については専門の法律相談を勧めることも重要です。";

const NUTRITIONIST_INSTRUCTION: &str = "あなたは経験豊富な栄養士です。食事や栄養に関する相談に対して、栄養学の知識に基づいた適切なアドバイスを提供してください。個人の体質や健康状態に配慮したアドバイスを心がけてください。";

/// The expert a consultation is addressed to (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Physician,
    Lawyer,
    Nutritionist,
}

impl Persona {
    /// All personas, in the order they are offered to the user
    pub const ALL: [Persona; 3] = [Persona::Physician, Persona::Lawyer, Persona::Nutritionist];

    /// Stable identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Physician => "physician",
            Persona::Lawyer => "lawyer",
            Persona::Nutritionist => "nutritionist",
        }
    }

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Physician => "医師",
            Persona::Lawyer => "弁護士",
            Persona::Nutritionist => "栄養士",
        }
    }

    /// Instruction text sent as the system message
    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Physician => PHYSICIAN_INSTRUCTION,
            Persona::Lawyer => LAWYER_INSTRUCTION,
            Persona::Nutritionist => NUTRITIONIST_INSTRUCTION,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Persona {
    type Err = DomainError;

    /// Accepts the identifier (case-insensitive) or the Japanese label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "physician" | "doctor" | "医師" => Ok(Persona::Physician),
            "lawyer" | "弁護士" => Ok(Persona::Lawyer),
            "nutritionist" | "dietitian" | "栄養士" => Ok(Persona::Nutritionist),
            _ => Err(DomainError::UnknownPersona(trimmed.to_string())),
        }
    }
}
