//! Validation and loading errors.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Header line of every aggregated validation message.
pub const VALIDATION_HEADER: &str = "Environment validation failed:";

/// One violated constraint on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Variable name the issue applies to
    pub path: String,
    /// Human-readable reason
    pub message: String,
}

impl ValidationIssue {
    /// Issue on `path` with a human-readable `message`
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every issue found in one validation pass
///
/// Renders as [`VALIDATION_HEADER`] followed by one `<path>: <message>` line
/// per issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.issues))]
pub struct ConfigValidationError {
    issues: Vec<ValidationIssue>,
}

impl ConfigValidationError {
    /// Wrap issues collected in one pass
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Issues in the order they were found
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Whether any issue concerns `path`
    pub fn mentions(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

fn render(issues: &[ValidationIssue]) -> String {
    std::iter::once(VALIDATION_HEADER.to_string())
        .chain(issues.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Configuration loading error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The env file exists but could not be read or parsed, or was required and missing
    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        /// File that failed
        path: PathBuf,
        /// Underlying dotenvy error
        #[source]
        source: dotenvy::Error,
    },

    /// The merged environment did not validate
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_has_header_and_one_line_per_issue() {
        let err = ConfigValidationError::new(vec![
            ValidationIssue::new("DISCORD_TOKEN", "Required"),
            ValidationIssue::new("CLIENT_ID", "Required"),
        ]);

        let message = err.to_string();
        let lines: Vec<_> = message.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "Environment validation failed:",
                "DISCORD_TOKEN: Required",
                "CLIENT_ID: Required",
            ]
        );
        assert!(err.mentions("CLIENT_ID"));
        assert!(!err.mentions("LOG_LEVEL"));
    }

    #[test]
    fn test_validation_error_is_transparent_inside_config_error() {
        let err: ConfigError =
            ConfigValidationError::new(vec![ValidationIssue::new("LOG_LEVEL", "bad")]).into();
        assert_eq!(err.to_string(), "Environment validation failed:\nLOG_LEVEL: bad");
    }
}
