//! Log transport selection.
//!
//! Maps a runtime mode and an optional file path to the ordered list of sinks
//! the logger writes to. The mapping is pure and knows nothing about the
//! logging backend; [`LoggerImpl`](super::LoggerImpl) turns descriptors into
//! subscriber layers.

use serde::Serialize;
use std::path::PathBuf;

/// Mode that selects the human-readable console sink
pub const DEVELOPMENT_MODE: &str = "development";

/// Time format of the human-readable console sink (`HH:MM:ss`)
pub const PRETTY_TIME_FORMAT: &str = "%H:%M:%S";

/// Record fields hidden by the human-readable console sink
pub const PRETTY_IGNORED_FIELDS: [&str; 2] = ["pid", "hostname"];

/// Kind of sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportTarget {
    /// Colorized, human-readable console output
    PrettyConsole,
    /// Structured (JSON) console output
    RawConsole,
    /// Structured output appended to a file
    File,
}

/// Where a sink writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// The process standard output handle
    Stdout,
    /// A file path
    Path(PathBuf),
}

/// Sink options; unset options take the backend's defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportOptions {
    /// ANSI colours on the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorize: Option<bool>,

    /// chrono format for timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,

    /// Fields never printed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Where the sink writes
    pub destination: Destination,

    /// Create missing parent directories first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_directories: Option<bool>,
}

impl TransportOptions {
    fn to(destination: Destination) -> Self {
        Self {
            colorize: None,
            time_format: None,
            ignore: Vec::new(),
            destination,
            create_directories: None,
        }
    }
}

/// One sink and its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportDescriptor {
    /// Sink kind
    pub target: TransportTarget,
    /// Sink options
    pub options: TransportOptions,
}

impl TransportDescriptor {
    fn pretty_console() -> Self {
        Self {
            target: TransportTarget::PrettyConsole,
            options: TransportOptions {
                colorize: Some(true),
                time_format: Some(PRETTY_TIME_FORMAT.to_string()),
                ignore: PRETTY_IGNORED_FIELDS.iter().map(ToString::to_string).collect(),
                ..TransportOptions::to(Destination::Stdout)
            },
        }
    }

    fn raw_console() -> Self {
        Self {
            target: TransportTarget::RawConsole,
            options: TransportOptions::to(Destination::Stdout),
        }
    }

    fn file(path: &str) -> Self {
        Self {
            target: TransportTarget::File,
            options: TransportOptions {
                create_directories: Some(true),
                ..TransportOptions::to(Destination::Path(PathBuf::from(path)))
            },
        }
    }
}

/// Build the ordered sink list for a logger
///
/// The console sink always comes first: human-readable in `development`,
/// structured for every other mode. A file sink follows only when
/// `file_path` is non-empty.
pub fn build_transport_targets(mode: &str, file_path: Option<&str>) -> Vec<TransportDescriptor> {
    let console = if mode == DEVELOPMENT_MODE {
        TransportDescriptor::pretty_console()
    } else {
        TransportDescriptor::raw_console()
    };

    let mut targets = vec![console];
    if let Some(path) = file_path.filter(|path| !path.is_empty()) {
        targets.push(TransportDescriptor::file(path));
    }
    targets
}
