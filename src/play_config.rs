//! Play configuration for the terminal client.

use crate::games::tictactoe::SearchStrategy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark drawn for the human's cells.
    #[serde(default = "default_human_mark")]
    human_mark: char,

    /// Mark drawn for the opponent's cells.
    #[serde(default = "default_opponent_mark")]
    opponent_mark: char,

    /// Search used by the opponent.
    #[serde(default)]
    strategy: SearchStrategy,

    /// Print the score of every candidate reply after each turn.
    #[serde(default)]
    show_scores: bool,
}

fn default_human_mark() -> char {
    'X'
}

fn default_opponent_mark() -> char {
    'O'
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            opponent_mark: default_opponent_mark(),
            strategy: SearchStrategy::default(),
            show_scores: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_mark.is_whitespace() || self.opponent_mark.is_whitespace() {
            return Err(ConfigError::new("Marks must not be whitespace".to_string()));
        }
        if self.human_mark == self.opponent_mark {
            return Err(ConfigError::new(format!(
                "Human and opponent marks must differ (both are {:?})",
                self.human_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
