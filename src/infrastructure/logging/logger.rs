//! `tracing` subscriber built from transport descriptors.

use super::config::LogConfig;
use super::transport::{Destination, TransportDescriptor, TransportTarget};
use crate::domain::models::LogLevel;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// A type-erased subscriber layer
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger implementation using tracing
///
/// Holds the worker guards of non-blocking file sinks; dropping the logger
/// flushes them.
pub struct LoggerImpl {
    _guards: Vec<WorkerGuard>,
}

impl LoggerImpl {
    /// Initialize the global logger with the given configuration
    ///
    /// One layer is installed per transport returned by
    /// [`LogConfig::targets`]. `RUST_LOG` overrides the configured level.
    ///
    /// # Errors
    /// Returns an error if a file sink cannot be opened or a global
    /// subscriber is already installed
    pub fn init(config: &LogConfig) -> Result<Self> {
        let targets = config.targets();
        let (layers, guards) = build_layers(&targets)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(tracing_level(config.level).into())
            .from_env_lossy();

        tracing_subscriber::registry()
            .with(layers.with_filter(env_filter))
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        tracing::info!(
            level = %config.level,
            mode = %config.mode,
            sinks = targets.len(),
            file_output = !guards.is_empty(),
            "logger initialized"
        );

        Ok(Self { _guards: guards })
    }
}

/// Build one layer per transport, in order
///
/// File sinks write through a non-blocking worker; the returned guards must
/// outlive the layers.
pub fn build_layers(targets: &[TransportDescriptor]) -> Result<(Vec<BoxedLayer>, Vec<WorkerGuard>)> {
    let mut layers = Vec::with_capacity(targets.len());
    let mut guards = Vec::new();

    for descriptor in targets {
        let writer = match &descriptor.options.destination {
            Destination::Stdout => BoxMakeWriter::new(io::stdout),
            Destination::Path(path) => {
                let appender =
                    file_appender(path, descriptor.options.create_directories.unwrap_or(false))?;
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                guards.push(guard);
                BoxMakeWriter::new(non_blocking)
            }
        };
        layers.push(format_layer(descriptor, writer));
    }

    Ok((layers, guards))
}

fn format_layer(descriptor: &TransportDescriptor, writer: BoxMakeWriter) -> BoxedLayer {
    let options = &descriptor.options;

    match descriptor.target {
        // pid and hostname are never recorded by the fmt layer, so
        // `options.ignore` needs no handling here.
        TransportTarget::PrettyConsole => {
            let timer = options
                .time_format
                .clone()
                .map_or_else(ChronoLocal::rfc_3339, ChronoLocal::new);

            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(options.colorize.unwrap_or(false))
                .with_timer(timer)
                .with_target(false)
                .boxed()
        }
        TransportTarget::RawConsole => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        // File output - always JSON for structured logging
        TransportTarget::File => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    }
}

/// Open an append-only, never-rotating appender for exactly `path`
fn file_appender(path: &Path, create_directories: bool) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path {} has no file name", path.display()))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if create_directories {
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create log directory {}", directory.display()))?;
    }

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Map a configured level to its tracing counterpart
const fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, warn};
