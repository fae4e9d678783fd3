//! Implementation of the `guildwarden check` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{or_dash, output, table_with_header, CommandOutput};
use crate::domain::models::{redact, Config};
use crate::infrastructure::config::loader::DEFAULT_ENV_FILE;
use crate::infrastructure::config::{global, ConfigLoader};
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

/// Arguments for `check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Env file merged under the process environment (must exist when given)
    #[arg(long, short = 'e')]
    pub env_file: Option<PathBuf>,

    /// Runtime mode used for logger sinks (defaults to APP_ENV, then production)
    #[arg(long, short)]
    pub mode: Option<String>,

    /// Also build the logger from the validated configuration (not with --json)
    #[arg(long)]
    pub init_logger: bool,
}

/// Report for a successful check
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Always true; failures exit through the error path
    pub valid: bool,
    /// Runtime mode in effect
    pub mode: String,
    /// Every variable with secrets redacted
    pub variables: Vec<CheckedVariable>,
    /// Both admin credentials are set
    pub admin_credentials_configured: bool,
}

/// One variable in the report
#[derive(Debug, Serialize)]
pub struct CheckedVariable {
    /// Variable name
    pub name: &'static str,
    /// Effective value, redacted when secret
    pub value: String,
}

impl CheckOutput {
    fn from_config(config: &Config, mode: String) -> Self {
        let admin = &config.admin_api;
        let secret = |value: Option<&str>| value.map_or_else(|| "-".to_string(), redact);
        let variables = vec![
            ("DISCORD_TOKEN", redact(&config.discord.token)),
            ("CLIENT_ID", config.discord.client_id.clone()),
            ("DATABASE_PATH", config.database.path.clone()),
            ("LOG_LEVEL", config.logging.level.to_string()),
            ("LOG_FILE_PATH", or_dash(config.logging.file_path.as_deref())),
            ("RATE_LIMIT_WARN_THRESHOLD", config.rate_limit.warn_threshold.to_string()),
            ("RATE_LIMIT_CRASH_THRESHOLD", config.rate_limit.crash_threshold.to_string()),
            ("RATE_LIMIT_WINDOW_MS", config.rate_limit.window_ms.to_string()),
            ("ADMIN_API_ENABLED", admin.enabled.to_string()),
            ("ADMIN_API_PORT", admin.port.to_string()),
            ("ADMIN_API_TOKEN", secret(admin.token.as_deref())),
            ("ADMIN_API_BIND_ADDRESS", admin.bind_address.clone()),
            ("ADMIN_USERNAME", or_dash(admin.username.as_deref())),
            ("ADMIN_PASSWORD_HASH", secret(admin.password_hash.as_deref())),
        ];

        Self {
            valid: true,
            mode,
            variables: variables
                .into_iter()
                .map(|(name, value)| CheckedVariable { name, value })
                .collect(),
            admin_credentials_configured: admin.credentials().is_some(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut table = table_with_header(&["Variable", "Value"]);
        for variable in &self.variables {
            table.add_row(vec![variable.name.to_string(), variable.value.clone()]);
        }

        format!(
            "{} (mode: {})\n{table}",
            console::style("Environment is valid").green().bold(),
            self.mode
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Load, validate and report the environment
pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    // Console sinks write to stdout, which --json reserves for the report.
    if args.init_logger && json_mode {
        bail!("--init-logger cannot be combined with --json");
    }

    let env_file = args
        .env_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));
    let raw = ConfigLoader::raw_environment(&env_file, args.env_file.is_some())?;
    let mode = args
        .mode
        .unwrap_or_else(|| ConfigLoader::runtime_mode(&raw));

    let config = ConfigLoader::validate(&raw)?;
    let config = global::install(config)?;

    let _logger = if args.init_logger {
        let logger = LoggerImpl::init(&LogConfig::from_config(config, mode.as_str()))
            .context("Failed to initialize logger")?;
        tracing::info!(mode = %mode, "configuration check passed");
        Some(logger)
    } else {
        None
    };

    output(&CheckOutput::from_config(config, mode), json_mode);
    Ok(())
}
