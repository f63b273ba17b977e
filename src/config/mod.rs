//! Dialog configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `DATE_DIALOG` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use date_dialog::config::DialogConfig;
//!
//! let config = DialogConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Initial prompt: {}", config.prompts.initial);
//! ```

mod error;
mod prompts;

pub use error::{ConfigError, ValidationError};
pub use prompts::PromptsConfig;

use serde::Deserialize;

/// Root configuration for the date dialog.
///
/// Every field has a default, so `DialogConfig::load()` succeeds in an
/// empty environment with the stock prompt texts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DialogConfig {
    /// Prompt texts shown to the user.
    #[serde(default)]
    pub prompts: PromptsConfig,
}

impl DialogConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DATE_DIALOG` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DATE_DIALOG__PROMPTS__INITIAL=...` -> `prompts.initial = ...`
    /// - `DATE_DIALOG__PROMPTS__CLARIFY=...` -> `prompts.clarify = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DATE_DIALOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any prompt text is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.prompts.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DATE_DIALOG__PROMPTS__INITIAL");
        env::remove_var("DATE_DIALOG__PROMPTS__CLARIFY");
    }

    #[test]
    fn loads_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = DialogConfig::load().unwrap();

        assert_eq!(config.prompts.initial, PromptsConfig::default().initial);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_prompt_texts() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DATE_DIALOG__PROMPTS__INITIAL", "When are you flying out?");

        let config = DialogConfig::load().unwrap();

        assert_eq!(config.prompts.initial, "When are you flying out?");
        assert_eq!(config.prompts.clarify, PromptsConfig::default().clarify);
        clear_env();
    }

    #[test]
    fn default_config_validates() {
        assert!(DialogConfig::default().validate().is_ok());
    }
}
