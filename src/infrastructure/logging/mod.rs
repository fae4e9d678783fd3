//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Transport selection from runtime mode and log file path
//! - Human-readable or JSON console output
//! - Non-blocking JSON file output with parent directory creation

pub mod config;
pub mod logger;
pub mod transport;

pub use config::LogConfig;
pub use logger::{build_layers, LoggerImpl};
pub use transport::{
    build_transport_targets, Destination, TransportDescriptor, TransportOptions, TransportTarget,
};
