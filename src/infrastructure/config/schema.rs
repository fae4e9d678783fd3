//! Declarative environment schema.
//!
//! Every variable the bot reads is listed once in [`FIELDS`], in the order
//! issues are reported. The validator walks this table; nothing else in the
//! crate hard-codes coercion rules.

use crate::domain::models::LogLevel;

/// Bot token
pub const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
/// Discord application id
pub const CLIENT_ID: &str = "CLIENT_ID";
/// SQLite database file
pub const DATABASE_PATH: &str = "DATABASE_PATH";
/// Minimum log level
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Optional log file
pub const LOG_FILE_PATH: &str = "LOG_FILE_PATH";
/// Event count that triggers a rate-limit warning
pub const RATE_LIMIT_WARN_THRESHOLD: &str = "RATE_LIMIT_WARN_THRESHOLD";
/// Event count treated as a crash
pub const RATE_LIMIT_CRASH_THRESHOLD: &str = "RATE_LIMIT_CRASH_THRESHOLD";
/// Rate-limit window in milliseconds
pub const RATE_LIMIT_WINDOW_MS: &str = "RATE_LIMIT_WINDOW_MS";
/// Admin API switch
pub const ADMIN_API_ENABLED: &str = "ADMIN_API_ENABLED";
/// Admin API port
pub const ADMIN_API_PORT: &str = "ADMIN_API_PORT";
/// Admin API bearer token
pub const ADMIN_API_TOKEN: &str = "ADMIN_API_TOKEN";
/// Admin API bind address
pub const ADMIN_API_BIND_ADDRESS: &str = "ADMIN_API_BIND_ADDRESS";
/// Admin login name
pub const ADMIN_USERNAME: &str = "ADMIN_USERNAME";
/// Admin password hash
pub const ADMIN_PASSWORD_HASH: &str = "ADMIN_PASSWORD_HASH";

/// How a raw value is coerced, and what it falls back to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Must be present with at least one character
    RequiredString,
    /// Absent maps to `None`; `""` is kept as a value
    OptionalString,
    /// Absent or `""` takes the default
    StringWithDefault(&'static str),
    /// Parsed as a finite `f64`; absent or `""` takes the default
    NumberWithDefault(f64),
    /// Only `true`/`1` (any case) enable; absent takes the default
    BooleanWithDefault(bool),
    /// Case-sensitive membership in `allowed`; absent or `""` takes the default
    EnumWithDefault {
        allowed: &'static [&'static str],
        default: &'static str,
    },
}

impl FieldKind {
    /// Short human description used in CLI listings
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RequiredString => "required string",
            Self::OptionalString => "optional string",
            Self::StringWithDefault(_) => "string",
            Self::NumberWithDefault(_) => "number",
            Self::BooleanWithDefault(_) => "boolean",
            Self::EnumWithDefault { .. } => "enum",
        }
    }

    /// The default rendered as text, if the field has one
    pub fn default_display(&self) -> Option<String> {
        match self {
            Self::RequiredString | Self::OptionalString => None,
            Self::StringWithDefault(value) => Some((*value).to_string()),
            Self::NumberWithDefault(value) => Some(value.to_string()),
            Self::BooleanWithDefault(value) => Some(value.to_string()),
            Self::EnumWithDefault { default, .. } => Some((*default).to_string()),
        }
    }
}

/// One environment variable and its coercion rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Variable name
    pub name: &'static str,
    /// Coercion rule
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The full schema, in reporting order.
pub const FIELDS: [FieldSpec; 14] = [
    FieldSpec::new(DISCORD_TOKEN, FieldKind::RequiredString),
    FieldSpec::new(CLIENT_ID, FieldKind::RequiredString),
    FieldSpec::new(DATABASE_PATH, FieldKind::StringWithDefault("./data/bot.db")),
    FieldSpec::new(
        LOG_LEVEL,
        FieldKind::EnumWithDefault {
            allowed: &LogLevel::VARIANTS,
            default: "info",
        },
    ),
    FieldSpec::new(LOG_FILE_PATH, FieldKind::OptionalString),
    FieldSpec::new(RATE_LIMIT_WARN_THRESHOLD, FieldKind::NumberWithDefault(20.0)),
    FieldSpec::new(RATE_LIMIT_CRASH_THRESHOLD, FieldKind::NumberWithDefault(50.0)),
    FieldSpec::new(RATE_LIMIT_WINDOW_MS, FieldKind::NumberWithDefault(60_000.0)),
    FieldSpec::new(ADMIN_API_ENABLED, FieldKind::BooleanWithDefault(false)),
    FieldSpec::new(ADMIN_API_PORT, FieldKind::NumberWithDefault(3000.0)),
    FieldSpec::new(ADMIN_API_TOKEN, FieldKind::OptionalString),
    // Localhost only unless an operator opts in.
    FieldSpec::new(ADMIN_API_BIND_ADDRESS, FieldKind::StringWithDefault("127.0.0.1")),
    FieldSpec::new(ADMIN_USERNAME, FieldKind::OptionalString),
    FieldSpec::new(ADMIN_PASSWORD_HASH, FieldKind::OptionalString),
];

/// Look up a field by variable name
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}
