//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How [`BoardEngine::completion_message`](crate::BoardEngine::completion_message)
/// behaves before the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CompletionPolicy {
    /// Always answer; an unfinished game without a line reads `"Draw!"`.
    #[default]
    Lenient,
    /// Answer only once the game is won or drawn.
    Strict,
}

/// Configuration for a [`BoardEngine`](crate::BoardEngine).
///
/// ```toml
/// completion_policy = "strict"
/// verify_invariants = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Completion message behaviour while a game is in progress.
    #[serde(default)]
    completion_policy: CompletionPolicy,

    /// Check rule invariants after every applied move.
    #[serde(default = "default_verify_invariants")]
    verify_invariants: bool,
}

fn default_verify_invariants() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completion_policy: CompletionPolicy::default(),
            verify_invariants: default_verify_invariants(),
        }
    }
}

impl EngineConfig {
    /// Creates a new engine configuration.
    #[instrument]
    pub fn new(completion_policy: CompletionPolicy, verify_invariants: bool) -> Self {
        Self {
            completion_policy,
            verify_invariants,
        }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(
            completion_policy = %config.completion_policy,
            verify_invariants = config.verify_invariants,
            "Config parsed"
        );
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(completion_policy = %config.completion_policy, "Config loaded successfully");
        Ok(config)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
