//! Guildwarden - environment configuration for the Discord bot
//!
//! Guildwarden turns the process environment into a validated, typed
//! configuration and decides where the bot's structured logs go.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration types and the raw environment view
//! - **Infrastructure Layer** (`infrastructure`): `.env` loading, schema-driven
//!   validation, transport selection and the tracing-based logger
//! - **CLI Layer** (`cli`): inspection commands
//!
//! # Example
//!
//! ```no_run
//! use guildwarden::{ConfigLoader, LogConfig, LoggerImpl};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let _logger = LoggerImpl::init(&LogConfig::from_config(&config, "production"))?;
//!     tracing::info!(database = %config.database.path, "starting");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    AdminApiConfig, Config, DatabaseConfig, DiscordConfig, LogLevel, LoggingConfig,
    RateLimitConfig, RawEnvironment,
};
pub use infrastructure::config::{
    ConfigError, ConfigLoader, ConfigValidationError, ConfigValidator, ValidationIssue,
    ValidationOutcome,
};
pub use infrastructure::logging::{
    build_transport_targets, LogConfig, LoggerImpl, TransportDescriptor, TransportTarget,
};
