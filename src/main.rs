//! Guildwarden CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use guildwarden::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // `check --init-logger` installs the configured logger instead.
    let configured_logger = matches!(&cli.command, Commands::Check(args) if args.init_logger);
    if !configured_logger {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let result = match cli.command {
        Commands::Check(args) => guildwarden::cli::commands::check::execute(args, cli.json),
        Commands::Transports(args) => {
            guildwarden::cli::commands::transports::execute(args, cli.json)
        }
        Commands::Fields => guildwarden::cli::commands::fields::execute(cli.json),
    };

    if let Err(err) = result {
        guildwarden::cli::handle_error(err, cli.json);
    }
}
