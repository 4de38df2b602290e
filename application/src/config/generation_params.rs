//! Parameters the use case sends alongside the prompt.

use consult_domain::Model;
use serde::{Deserialize, Serialize};

/// Sampling temperature used for every consultation. Not configurable.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model settings for a completion request.
///
/// Resolved once at startup from configuration and then shared, unchanged,
/// by every request. The temperature is always [`DEFAULT_TEMPERATURE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: Model,
}

impl GenerationParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Temperature sent with every request
    pub fn temperature(&self) -> f32 {
        DEFAULT_TEMPERATURE
    }
}
