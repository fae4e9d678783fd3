//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::check::CheckArgs;
use super::commands::transports::TransportsArgs;

/// Top-level command line
#[derive(Parser)]
#[command(name = "guildwarden")]
#[command(about = "Guildwarden - environment checks for the Discord bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate the environment and print the resulting configuration
    Check(CheckArgs),

    /// Show the log sinks selected for a mode and log file
    Transports(TransportsArgs),

    /// List every environment variable the bot reads
    Fields,
}
