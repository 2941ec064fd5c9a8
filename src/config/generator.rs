//! Password generator configuration.

use config::ConfigError;
use serde::Deserialize;

use crate::domain::charset::DEFAULT_SYMBOLS;

/// Generation bounds and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Shortest password that may be requested.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Longest password that may be requested.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Length used when no settings have been saved.
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Characters making up the symbol class.
    #[serde(default = "default_symbols")]
    pub symbols: String,

    /// Number of entries kept in the history log.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

const fn default_min_length() -> usize {
    4
}

const fn default_max_length() -> usize {
    128
}

const fn default_length() -> usize {
    16
}

fn default_symbols() -> String {
    DEFAULT_SYMBOLS.to_string()
}

const fn default_history_capacity() -> usize {
    10
}

impl GeneratorConfig {
    /// Validate bounds and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the length bounds are inconsistent, the symbol set
    /// is empty or the history capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::Message(
                "generator.min_length must be at least 1".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::Message(format!(
                "generator.min_length ({}) exceeds generator.max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if !(self.min_length..=self.max_length).contains(&self.default_length) {
            return Err(ConfigError::Message(format!(
                "generator.default_length ({}) must be within {}..={}",
                self.default_length, self.min_length, self.max_length
            )));
        }
        if self.symbols.is_empty() {
            return Err(ConfigError::Message(
                "generator.symbols cannot be empty".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Message(
                "generator.history_capacity cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            default_length: default_length(),
            symbols: default_symbols(),
            history_capacity: default_history_capacity(),
        }
    }
}
