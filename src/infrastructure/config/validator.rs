//! Schema-driven environment validation.
//!
//! Validation runs in two stages:
//! 1. every field in [`FIELDS`] is coerced independently and every failure is
//!    recorded, so one pass reports all misconfiguration;
//! 2. once all fields coerced, cross-field rules run against the typed record.

use std::collections::HashMap;
use tracing::debug;

use super::error::{ConfigValidationError, ValidationIssue};
use super::schema::{self, FieldKind, FIELDS};
use crate::domain::models::{
    AdminApiConfig, Config, DatabaseConfig, DiscordConfig, LogLevel, LoggingConfig,
    RateLimitConfig, RawEnvironment,
};

/// Message for an absent required field.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Message for a required field set to `""`.
pub const TOO_SHORT_MESSAGE: &str = "String must contain at least 1 character(s)";

/// Message for a numeric field that does not parse.
pub const NOT_A_NUMBER_MESSAGE: &str = "Expected number, received nan";

/// Message for the admin username/password-hash pairing rule.
pub const CREDENTIAL_PAIRING_MESSAGE: &str =
    "ADMIN_USERNAME and ADMIN_PASSWORD_HASH must both be set or both be unset";

/// Result of a validation pass that does not raise
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Every field and cross-field rule passed
    Valid(Config),
    /// At least one issue, in discovery order
    Invalid(Vec<ValidationIssue>),
}

impl ValidationOutcome {
    /// Convert into a `Result`, aggregating issues into one error
    pub fn into_result(self) -> Result<Config, ConfigValidationError> {
        match self {
            Self::Valid(config) => Ok(config),
            Self::Invalid(issues) => Err(ConfigValidationError::new(issues)),
        }
    }

    /// Whether validation passed
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Validates a [`RawEnvironment`] against the schema
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate, failing with every issue found
    pub fn validate(raw: &RawEnvironment) -> Result<Config, ConfigValidationError> {
        Self::safe_validate(raw).into_result()
    }

    /// Validate without raising
    pub fn safe_validate(raw: &RawEnvironment) -> ValidationOutcome {
        let mut values = HashMap::with_capacity(FIELDS.len());
        let mut issues = Vec::new();

        for spec in &FIELDS {
            match coerce(spec.kind, raw.get(spec.name)) {
                Ok(value) => {
                    values.insert(spec.name, value);
                }
                Err(message) => issues.push(ValidationIssue::new(spec.name, message)),
            }
        }

        if !issues.is_empty() {
            debug!(issues = issues.len(), "environment fields failed coercion");
            return ValidationOutcome::Invalid(issues);
        }

        let candidate = Candidate { values };
        let config = match candidate.into_config() {
            Ok(config) => config,
            Err(issue) => return ValidationOutcome::Invalid(vec![issue]),
        };

        issues.extend(check_admin_credentials(&config.admin_api));
        if !issues.is_empty() {
            return ValidationOutcome::Invalid(issues);
        }

        debug!(fields = FIELDS.len(), "environment validated");
        ValidationOutcome::Valid(config)
    }
}

/// A coerced value before it is placed in [`Config`]
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    OptionalText(Option<String>),
    Number(f64),
    Flag(bool),
}

fn coerce(kind: FieldKind, raw: Option<&str>) -> Result<FieldValue, String> {
    match kind {
        FieldKind::RequiredString => match raw {
            None => Err(REQUIRED_MESSAGE.to_string()),
            Some("") => Err(TOO_SHORT_MESSAGE.to_string()),
            Some(value) => Ok(FieldValue::Text(value.to_string())),
        },
        FieldKind::OptionalString => Ok(FieldValue::OptionalText(raw.map(str::to_string))),
        FieldKind::StringWithDefault(default) => Ok(FieldValue::Text(
            non_empty(raw).unwrap_or(default).to_string(),
        )),
        FieldKind::NumberWithDefault(default) => match non_empty(raw) {
            None => Ok(FieldValue::Number(default)),
            Some(value) => parse_number(value).map(FieldValue::Number),
        },
        FieldKind::BooleanWithDefault(default) => {
            Ok(FieldValue::Flag(raw.map_or(default, parse_flag)))
        }
        FieldKind::EnumWithDefault { allowed, default } => {
            let value = non_empty(raw).unwrap_or(default);
            if allowed.iter().any(|candidate| *candidate == value) {
                Ok(FieldValue::Text(value.to_string()))
            } else {
                Err(invalid_enum_message(allowed, value))
            }
        }
    }
}

/// Absent and `""` both mean "use the default".
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Surrounding whitespace is ignored and a whitespace-only value is zero;
/// non-finite results are rejected.
fn parse_number(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| NOT_A_NUMBER_MESSAGE.to_string())
}

/// Only `true` and `1` enable; every other string disables.
fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_lowercase().as_str(), "true" | "1")
}

fn invalid_enum_message(allowed: &[&str], received: &str) -> String {
    let expected = allowed
        .iter()
        .map(|value| format!("'{value}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received '{received}'")
}

fn check_admin_credentials(admin: &AdminApiConfig) -> Option<ValidationIssue> {
    let has_username = admin.username.as_deref().is_some_and(|value| !value.is_empty());
    let has_password_hash = admin
        .password_hash
        .as_deref()
        .is_some_and(|value| !value.is_empty());

    (has_username != has_password_hash)
        .then(|| ValidationIssue::new(schema::ADMIN_USERNAME, CREDENTIAL_PAIRING_MESSAGE))
}

/// Coerced values keyed by field name, assembled into [`Config`]
struct Candidate {
    values: HashMap<&'static str, FieldValue>,
}

impl Candidate {
    fn into_config(mut self) -> Result<Config, ValidationIssue> {
        Ok(Config {
            discord: DiscordConfig {
                token: self.text(schema::DISCORD_TOKEN)?,
                client_id: self.text(schema::CLIENT_ID)?,
            },
            database: DatabaseConfig {
                path: self.text(schema::DATABASE_PATH)?,
            },
            logging: LoggingConfig {
                level: self.log_level(schema::LOG_LEVEL)?,
                file_path: self.optional_text(schema::LOG_FILE_PATH)?,
            },
            rate_limit: RateLimitConfig {
                warn_threshold: self.number(schema::RATE_LIMIT_WARN_THRESHOLD)?,
                crash_threshold: self.number(schema::RATE_LIMIT_CRASH_THRESHOLD)?,
                window_ms: self.number(schema::RATE_LIMIT_WINDOW_MS)?,
            },
            admin_api: AdminApiConfig {
                enabled: self.flag(schema::ADMIN_API_ENABLED)?,
                port: self.number(schema::ADMIN_API_PORT)?,
                token: self.optional_text(schema::ADMIN_API_TOKEN)?,
                bind_address: self.text(schema::ADMIN_API_BIND_ADDRESS)?,
                username: self.optional_text(schema::ADMIN_USERNAME)?,
                password_hash: self.optional_text(schema::ADMIN_PASSWORD_HASH)?,
            },
        })
    }

    fn take(&mut self, name: &'static str) -> Result<FieldValue, ValidationIssue> {
        self.values
            .remove(name)
            .ok_or_else(|| ValidationIssue::new(name, "Field is missing from the schema"))
    }

    fn text(&mut self, name: &'static str) -> Result<String, ValidationIssue> {
        match self.take(name)? {
            FieldValue::Text(value) => Ok(value),
            other => Err(mismatch(name, "string", &other)),
        }
    }

    fn optional_text(&mut self, name: &'static str) -> Result<Option<String>, ValidationIssue> {
        match self.take(name)? {
            FieldValue::OptionalText(value) => Ok(value),
            other => Err(mismatch(name, "optional string", &other)),
        }
    }

    fn number(&mut self, name: &'static str) -> Result<f64, ValidationIssue> {
        match self.take(name)? {
            FieldValue::Number(value) => Ok(value),
            other => Err(mismatch(name, "number", &other)),
        }
    }

    fn flag(&mut self, name: &'static str) -> Result<bool, ValidationIssue> {
        match self.take(name)? {
            FieldValue::Flag(value) => Ok(value),
            other => Err(mismatch(name, "boolean", &other)),
        }
    }

    fn log_level(&mut self, name: &'static str) -> Result<LogLevel, ValidationIssue> {
        self.text(name)?
            .parse::<LogLevel>()
            .map_err(|err| ValidationIssue::new(name, err.to_string()))
    }
}

fn mismatch(name: &str, expected: &str, found: &FieldValue) -> ValidationIssue {
    ValidationIssue::new(name, format!("Schema expected {expected}, coerced {found:?}"))
}
