//! cropmatch CLI - rank crops against a soil and climate profile.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flag
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Rank {
                source,
                soil,
                ph,
                drainage,
                zone,
                limit,
                all,
                format,
                output,
            } => commands::rank::run(
                &config,
                commands::rank::RankArgs {
                    source,
                    soil,
                    ph,
                    drainage,
                    zone,
                    limit,
                    all,
                    format,
                    output,
                },
                cli.verbose,
            ),

            Commands::Inspect { source, json } => {
                commands::inspect::run(&config, source, json, cli.verbose)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
