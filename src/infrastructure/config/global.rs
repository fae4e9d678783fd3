//! Process-wide configuration holder.
//!
//! The validated [`Config`] is installed once at startup and read by every
//! subsystem for the rest of the process.

use std::sync::OnceLock;
use thiserror::Error;
use tracing::info;

use crate::domain::models::Config;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returned when [`install`] is called a second time
#[derive(Debug, Error)]
#[error("configuration has already been installed")]
pub struct AlreadyInstalled;

/// Install the process configuration; only the first call succeeds
pub fn install(config: Config) -> Result<&'static Config, AlreadyInstalled> {
    CONFIG.set(config).map_err(|_| AlreadyInstalled)?;
    let installed = get().ok_or(AlreadyInstalled)?;

    info!(
        database_path = %installed.database.path,
        log_level = %installed.logging.level,
        admin_api_enabled = installed.admin_api.enabled,
        "configuration installed"
    );
    Ok(installed)
}

/// The installed configuration, if any
pub fn get() -> Option<&'static Config> {
    CONFIG.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RawEnvironment;
    use crate::infrastructure::config::ConfigValidator;

    #[test]
    fn test_install_once() {
        let config = ConfigValidator::validate(
            &RawEnvironment::new()
                .with("DISCORD_TOKEN", "token")
                .with("CLIENT_ID", "client"),
        )
        .unwrap();

        let installed = install(config.clone()).unwrap();
        assert_eq!(installed, &config);
        assert_eq!(get(), Some(&config));
        assert!(install(config).is_err());
    }
}
