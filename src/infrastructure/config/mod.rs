//! Configuration management infrastructure
//!
//! Environment-driven configuration:
//! - `.env` merging with process-variable precedence
//! - Declarative schema with defaults and coercion
//! - Aggregated validation errors
//! - Process-wide holder for the validated config

pub mod error;
pub mod global;
pub mod loader;
pub mod schema;
pub mod validator;

pub use error::{ConfigError, ConfigValidationError, ValidationIssue, VALIDATION_HEADER};
pub use loader::ConfigLoader;
pub use schema::{FieldKind, FieldSpec, FIELDS};
pub use validator::{ConfigValidator, ValidationOutcome};
