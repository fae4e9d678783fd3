//! Command-line interface
//!
//! Inspection commands for the bot's environment: validating it, listing the
//! variables it reads, and previewing the log sinks a mode selects.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::infrastructure::config::ConfigValidationError;

/// Report a failed command and exit with status 1
///
/// Validation failures keep their multi-line message; in JSON mode their
/// issues are also listed individually.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let issues = err
            .downcast_ref::<ConfigValidationError>()
            .map(|validation| {
                validation
                    .issues()
                    .iter()
                    .map(|issue| serde_json::json!({ "path": issue.path, "message": issue.message }))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
            "issues": issues,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }

    std::process::exit(1);
}
