//! Infrastructure layer: environment loading, validation and logging.

pub mod config;
pub mod logging;
