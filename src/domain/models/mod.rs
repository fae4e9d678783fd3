//! Domain models

pub mod config;
pub mod environment;

pub use config::{
    redact, AdminApiConfig, Config, DatabaseConfig, DiscordConfig, LogLevel, LoggingConfig,
    ParseLogLevelError, RateLimitConfig,
};
pub use environment::RawEnvironment;
