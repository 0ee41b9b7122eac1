//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cropmatch: rank crops against a soil and climate profile
#[derive(Parser)]
#[command(name = "cropmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the crops in a catalog against a soil profile
    Rank {
        /// Catalog file path, or a logical name looked up in the configured directories
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Soil type, e.g. "Loam" or "Sand and Clay"
        #[arg(long)]
        soil: String,

        /// Soil pH
        #[arg(long, allow_hyphen_values = true)]
        ph: f64,

        /// Drainage, e.g. "Well-drained"
        #[arg(long)]
        drainage: String,

        /// USDA hardiness zone, e.g. "7" or "Zone 7b"
        #[arg(long)]
        zone: String,

        /// Maximum number of crops to show (default from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show the full ranking
        #[arg(long, conflicts_with = "limit")]
        all: bool,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a catalog and report what was read
    Inspect {
        /// Catalog file path, or a logical name looked up in the configured directories
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table, csv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank() {
        let cli = Cli::try_parse_from([
            "cropmatch", "rank", "crops", "--soil", "Loam", "--ph", "6.5", "--drainage",
            "Well-drained", "--zone", "7", "-n", "5", "--format", "csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank {
                source,
                ph,
                limit,
                format,
                all,
                ..
            } => {
                assert_eq!(source, "crops");
                assert_eq!(ph, 6.5);
                assert_eq!(limit, Some(5));
                assert_eq!(format, OutputFormat::Csv);
                assert!(!all);
            }
            _ => panic!("expected rank"),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
