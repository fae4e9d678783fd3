//! Implementation of the `guildwarden transports` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, table_with_header, CommandOutput};
use crate::infrastructure::config::loader::DEFAULT_MODE;
use crate::infrastructure::logging::{
    build_transport_targets, Destination, TransportDescriptor, TransportTarget,
};

/// Arguments for `transports`
#[derive(Args, Debug)]
pub struct TransportsArgs {
    /// Runtime mode; only `development` selects the human-readable console
    #[arg(long, short, env = "APP_ENV", default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Log file path; empty means no file sink
    #[arg(long, short = 'f', env = "LOG_FILE_PATH")]
    pub log_file: Option<String>,
}

/// Selected sinks for one mode
#[derive(Debug, Serialize)]
pub struct TransportsOutput {
    /// Runtime mode the plan was built for
    pub mode: String,
    /// Sinks, console first
    pub targets: Vec<TransportDescriptor>,
}

impl CommandOutput for TransportsOutput {
    fn to_human(&self) -> String {
        let mut table = table_with_header(&["#", "Target", "Destination", "Options"]);

        for (index, descriptor) in self.targets.iter().enumerate() {
            table.add_row(vec![
                index.to_string(),
                target_name(descriptor.target).to_string(),
                destination_display(&descriptor.options.destination),
                options_display(descriptor),
            ]);
        }

        format!("Log transports for mode '{}':\n{table}", self.mode)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

const fn target_name(target: TransportTarget) -> &'static str {
    match target {
        TransportTarget::PrettyConsole => "pretty-console",
        TransportTarget::RawConsole => "raw-console",
        TransportTarget::File => "file",
    }
}

fn destination_display(destination: &Destination) -> String {
    match destination {
        Destination::Stdout => "stdout".to_string(),
        Destination::Path(path) => path.display().to_string(),
    }
}

fn options_display(descriptor: &TransportDescriptor) -> String {
    let options = &descriptor.options;
    let mut parts = Vec::new();

    if let Some(colorize) = options.colorize {
        parts.push(format!("colorize={colorize}"));
    }
    if let Some(format) = &options.time_format {
        parts.push(format!("time={format}"));
    }
    if !options.ignore.is_empty() {
        parts.push(format!("ignore={}", options.ignore.join(",")));
    }
    if let Some(create) = options.create_directories {
        parts.push(format!("mkdir={create}"));
    }

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

/// Print the transport plan
pub fn execute(args: TransportsArgs, json_mode: bool) -> Result<()> {
    let targets = build_transport_targets(&args.mode, args.log_file.as_deref());
    output(
        &TransportsOutput {
            mode: args.mode,
            targets,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output_lists_console_then_file() {
        let output = TransportsOutput {
            mode: "development".to_string(),
            targets: build_transport_targets("development", Some("./logs/x.log")),
        };

        let human = output.to_human();
        let console_at = human.find("pretty-console").unwrap();
        let file_at = human.find("./logs/x.log").unwrap();
        assert!(console_at < file_at);
        assert!(human.contains("mkdir=true"));
    }

    #[test]
    fn test_options_display_for_raw_console() {
        let targets = build_transport_targets("production", None);
        assert_eq!(options_display(&targets[0]), "-");
    }
}
