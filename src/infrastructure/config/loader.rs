//! Environment loading from the process and `.env` files.

use std::path::Path;
use tracing::debug;

use super::error::{ConfigError, ConfigValidationError};
use super::validator::ConfigValidator;
use crate::domain::models::{Config, RawEnvironment};

/// Env file read from the working directory when none is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variable holding the runtime mode passed to the transport selector
pub const MODE_VAR: &str = "APP_ENV";

/// Mode used when [`MODE_VAR`] is unset or empty
pub const DEFAULT_MODE: &str = "production";

/// Configuration loader merging the process environment with a `.env` file
///
/// Precedence (lowest to highest):
/// 1. Schema defaults (applied by the validator)
/// 2. Entries from the `.env` file
/// 3. Process environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment and an optional
    /// `./.env`
    pub fn load() -> Result<Config, ConfigError> {
        let raw = Self::raw_environment(Path::new(DEFAULT_ENV_FILE), false)?;
        Ok(Self::validate(&raw)?)
    }

    /// Load configuration from the process environment and `path`, which
    /// must exist
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let raw = Self::raw_environment(path.as_ref(), true)?;
        Ok(Self::validate(&raw)?)
    }

    /// Validate an already merged environment
    pub fn validate(raw: &RawEnvironment) -> Result<Config, ConfigValidationError> {
        ConfigValidator::validate(raw)
    }

    /// Snapshot the process environment and fill gaps from `env_file`
    ///
    /// A missing file is an error only when `required` is set.
    pub fn raw_environment(env_file: &Path, required: bool) -> Result<RawEnvironment, ConfigError> {
        let mut raw = RawEnvironment::from_process();
        let before = raw.len();
        raw.merge_missing(Self::read_env_file(env_file, required)?);

        debug!(
            env_file = %env_file.display(),
            from_file = raw.len() - before,
            "environment assembled"
        );
        Ok(raw)
    }

    /// Runtime mode from [`MODE_VAR`], defaulting to [`DEFAULT_MODE`]
    pub fn runtime_mode(raw: &RawEnvironment) -> String {
        raw.get(MODE_VAR)
            .filter(|mode| !mode.is_empty())
            .unwrap_or(DEFAULT_MODE)
            .to_string()
    }

    fn read_env_file(path: &Path, required: bool) -> Result<Vec<(String, String)>, ConfigError> {
        let to_error = |source: dotenvy::Error| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(err) if err.not_found() && !required => return Ok(Vec::new()),
            Err(err) => return Err(to_error(err)),
        };

        entries.map(|entry| entry.map_err(&to_error)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MANAGED_VARS: [&str; 3] = ["DISCORD_TOKEN", "CLIENT_ID", "LOG_LEVEL"];

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = env_file("DISCORD_TOKEN=file-token\nCLIENT_ID=file-client\nLOG_LEVEL=debug\n");

        temp_env::with_vars_unset(MANAGED_VARS, || {
            let config = ConfigLoader::load_from_file(file.path()).unwrap();
            assert_eq!(config.discord.token, "file-token");
            assert_eq!(config.discord.client_id, "file-client");
            assert_eq!(config.logging.level.as_str(), "debug");
        });
    }

    #[test]
    fn test_process_environment_wins_over_file() {
        let file = env_file("DISCORD_TOKEN=file-token\nCLIENT_ID=file-client\n");

        temp_env::with_vars(
            [("DISCORD_TOKEN", Some("process-token")), ("CLIENT_ID", None)],
            || {
                let config = ConfigLoader::load_from_file(file.path()).unwrap();
                assert_eq!(config.discord.token, "process-token");
                assert_eq!(config.discord.client_id, "file-client");
            },
        );
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.env");

        let err = ConfigLoader::load_from_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert!(err.to_string().contains("absent.env"));
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(".env");

        temp_env::with_var("GUILDWARDEN_LOADER_PROBE", Some("1"), || {
            let raw = ConfigLoader::raw_environment(&missing, false).unwrap();
            assert_eq!(raw.get("GUILDWARDEN_LOADER_PROBE"), Some("1"));
        });
    }

    #[test]
    fn test_validation_failure_is_reported() {
        let file = env_file("LOG_LEVEL=loud\n");

        temp_env::with_vars_unset(MANAGED_VARS, || {
            let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
            let ConfigError::Validation(validation) = err else {
                panic!("expected validation error");
            };
            assert!(validation.mentions("DISCORD_TOKEN"));
            assert!(validation.mentions("CLIENT_ID"));
            assert!(validation.mentions("LOG_LEVEL"));
        });
    }

    #[test]
    fn test_runtime_mode() {
        let raw = RawEnvironment::new();
        assert_eq!(ConfigLoader::runtime_mode(&raw), "production");

        let raw = raw.with(MODE_VAR, "");
        assert_eq!(ConfigLoader::runtime_mode(&raw), "production");

        let raw = raw.with(MODE_VAR, "development");
        assert_eq!(ConfigLoader::runtime_mode(&raw), "development");
    }
}
