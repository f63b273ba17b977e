//! Prompt text configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Prompt texts the date dialog shows to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    /// First request for a departure date.
    #[serde(default = "default_initial")]
    pub initial: String,

    /// Clarification and retry text. Instructs the user to supply day,
    /// month and year with an example literal date.
    #[serde(default = "default_clarify")]
    pub clarify: String,
}

impl PromptsConfig {
    /// Validate prompt configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt("initial"));
        }
        if self.clarify.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt("clarify"));
        }
        Ok(())
    }
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            clarify: default_clarify(),
        }
    }
}

fn default_initial() -> String {
    "Could you give me a date of departure?".to_string()
}

fn default_clarify() -> String {
    "I'm sorry, for best results, please enter your departure date including the day, \
     month and year, e.g. 01 January 2023"
        .to_string()
}
