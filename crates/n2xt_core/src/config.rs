//! Core runtime configuration.
//!
//! # Invariants
//! - `notification_timeout_ms` is strictly positive.
//! - `log_level` is one of `trace|debug|info|warn|error` after validation.
//! - `log_dir`, when set, is an absolute path.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::service::notification_presenter::DEFAULT_AUTO_DISMISS_MS;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub notification_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: DEFAULT_AUTO_DISMISS_MS,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document. Missing keys take
    /// their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&raw)
    }

    /// Checks invariants and normalizes `log_level` in place.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.notification_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "notification_timeout_ms must be greater than 0".to_string(),
            ));
        }
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::Invalid)?
            .to_string();
        if let Some(dir) = &self.log_dir {
            normalize_log_dir(dir).map_err(ConfigError::Invalid)?;
        }
        Ok(())
    }
}
