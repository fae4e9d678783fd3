//! Logger settings derived from the validated configuration.

use serde::{Deserialize, Serialize};

use super::transport::{build_transport_targets, TransportDescriptor};
use crate::domain::models::{Config, LogLevel};
use crate::infrastructure::config::loader::DEFAULT_MODE;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Minimum level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Runtime mode; `development` selects human-readable console output
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Log file (optional, if None or empty logs only to stdout)
    #[serde(default)]
    pub file_path: Option<String>,
}

impl LogConfig {
    /// Logging settings for a validated configuration
    pub fn from_config(config: &Config, mode: impl Into<String>) -> Self {
        Self {
            level: config.logging.level,
            mode: mode.into(),
            file_path: config.logging.file_path.clone(),
        }
    }

    /// Sinks the logger will write to, console first
    pub fn targets(&self) -> Vec<TransportDescriptor> {
        build_transport_targets(&self.mode, self.file_path.as_deref())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            mode: default_mode(),
            file_path: None,
        }
    }
}

const fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}
