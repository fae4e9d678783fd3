//! Validated bot configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validated process configuration
///
/// Built once per validation pass by
/// [`ConfigValidator`](crate::infrastructure::config::ConfigValidator) and
/// treated as immutable afterwards. Fields are grouped by the subsystem that
/// consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Discord client credentials
    pub discord: DiscordConfig,

    /// Storage settings
    pub database: DatabaseConfig,

    /// Logger settings
    pub logging: LoggingConfig,

    /// Rate limiter thresholds
    pub rate_limit: RateLimitConfig,

    /// Admin HTTP surface settings
    pub admin_api: AdminApiConfig,
}

/// Discord client credentials
#[derive(Clone, PartialEq, Eq)]
pub struct DiscordConfig {
    /// Bot token (`DISCORD_TOKEN`)
    pub token: String,

    /// Application client id (`CLIENT_ID`)
    pub client_id: String,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &redact(&self.token))
            .field("client_id", &self.client_id)
            .finish()
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level emitted by the logger
    pub level: LogLevel,

    /// Optional log file; `Some("")` is kept distinct from unset
    pub file_path: Option<String>,
}

/// Rate limiter thresholds
///
/// Values are taken verbatim from the environment, including negative and
/// fractional ones. Consumers that need bounds must check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Events per window before a warning is logged
    pub warn_threshold: f64,

    /// Events per window before the process bails out
    pub crash_threshold: f64,

    /// Window length in milliseconds
    pub window_ms: f64,
}

/// Admin HTTP API configuration
#[derive(Clone, PartialEq)]
pub struct AdminApiConfig {
    /// Whether the admin surface is started at all
    pub enabled: bool,

    /// Listen port, not range-checked
    pub port: f64,

    /// Static bearer token
    pub token: Option<String>,

    /// Bind address, accepted as an opaque string
    pub bind_address: String,

    /// Dashboard login name
    pub username: Option<String>,

    /// Dashboard password hash, opaque
    pub password_hash: Option<String>,
}

impl AdminApiConfig {
    /// Returns the login pair when both halves are non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password_hash.as_deref()) {
            (Some(user), Some(hash)) if !user.is_empty() && !hash.is_empty() => Some((user, hash)),
            _ => None,
        }
    }

    /// The port as a socket port, when it is an integer in `0..=65535`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn socket_port(&self) -> Option<u16> {
        let port = self.port;
        if port.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&port) {
            Some(port as u16)
        } else {
            None
        }
    }
}

impl fmt::Debug for AdminApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminApiConfig")
            .field("enabled", &self.enabled)
            .field("port", &self.port)
            .field("token", &self.token.as_deref().map(redact))
            .field("bind_address", &self.bind_address)
            .field("username", &self.username)
            .field("password_hash", &self.password_hash.as_deref().map(redact))
            .finish()
    }
}

/// Log level accepted by `LOG_LEVEL`
///
/// Parsing is case-sensitive: `"INFO"` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Potentially problematic situations
    Warn,
    /// Failure conditions
    Error,
}

impl LogLevel {
    /// Every accepted spelling, in severity order.
    pub const VARIANTS: [&'static str; 4] = ["debug", "info", "warn", "error"];

    /// Returns the environment spelling of the level
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of [`LogLevel::VARIANTS`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLogLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ParseLogLevelError(other.to_string())),
        }
    }
}

/// Mask a secret for display.
///
/// Long secrets keep their last four characters so operators can tell two
/// tokens apart; short ones are fully hidden.
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return "<empty>".to_string();
    }

    let chars: Vec<char> = secret.chars().collect();
    if chars.len() < 12 {
        return "****".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(username: Option<&str>, password_hash: Option<&str>) -> AdminApiConfig {
        AdminApiConfig {
            enabled: true,
            port: 3000.0,
            token: Some("admin-token-0123456789".to_string()),
            bind_address: "127.0.0.1".to_string(),
            username: username.map(str::to_string),
            password_hash: password_hash.map(str::to_string),
        }
    }

    #[test]
    fn test_log_level_parse_is_case_sensitive() {
        for name in LogLevel::VARIANTS {
            let level: LogLevel = name.parse().unwrap();
            assert_eq!(level.as_str(), name);
        }
        assert_eq!(
            "INFO".parse::<LogLevel>(),
            Err(ParseLogLevelError("INFO".to_string()))
        );
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact(""), "<empty>");
        assert_eq!(redact("short"), "****");
        assert_eq!(redact("abcdefghijklmnop"), "****mnop");
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let discord = DiscordConfig {
            token: "MTIzNDU2Nzg5.super-secret-token".to_string(),
            client_id: "123456789".to_string(),
        };
        let rendered = format!("{discord:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("123456789"));

        let rendered = format!("{:?}", admin(Some("root"), Some("$argon2id$v=19$hash")));
        assert!(!rendered.contains("argon2id"));
        assert!(!rendered.contains("admin-token-0123456789"));
        assert!(rendered.contains("root"));
    }

    #[test]
    fn test_credentials_require_both_halves() {
        assert_eq!(
            admin(Some("root"), Some("hash")).credentials(),
            Some(("root", "hash"))
        );
        assert_eq!(admin(Some("root"), None).credentials(), None);
        assert_eq!(admin(None, Some("hash")).credentials(), None);
        assert_eq!(admin(Some(""), Some("")).credentials(), None);
    }

    #[test]
    fn test_socket_port() {
        let mut config = admin(None, None);
        assert_eq!(config.socket_port(), Some(3000));

        config.port = 65535.0;
        assert_eq!(config.socket_port(), Some(65535));

        for out_of_range in [70000.0, -1.0, 80.5] {
            config.port = out_of_range;
            assert_eq!(config.socket_port(), None);
        }
    }
}
