//! Rank command - score every crop in a catalog against a soil profile.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;
use cropmatch::{report, CatalogConfig, QueryProfile, ScoredCrop};

use super::{open_catalog, CommandResult};
use crate::cli::OutputFormat;

pub struct RankArgs {
    pub source: String,
    pub soil: String,
    pub ph: f64,
    pub drainage: String,
    pub zone: String,
    pub limit: Option<usize>,
    pub all: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run(config: &CatalogConfig, args: RankArgs, verbose: bool) -> CommandResult {
    let catalog = open_catalog(&args.source, config)?;

    let profile = QueryProfile::new(args.soil, args.ph, args.drainage, args.zone)
        .with_limit(args.limit.unwrap_or(config.default_limit));

    let results = if args.all {
        catalog.rank_all(&profile)
    } else {
        catalog.query(&profile)
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => write_table(&mut out, &profile, catalog.len(), &results, verbose)?,
        OutputFormat::Csv => report::write_csv(&results, &mut out)?,
        OutputFormat::Json => writeln!(out, "{}", report::to_json(&results)?)?,
    }
    out.flush()?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} {} results to {}",
            "Wrote".green().bold(),
            results.len(),
            path.display().to_string().cyan()
        );
    }

    Ok(())
}

fn write_table(
    out: &mut dyn Write,
    profile: &QueryProfile,
    catalog_size: usize,
    results: &[ScoredCrop],
    verbose: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{} soil {}, pH {}, drainage {}, zone {}",
        "Profile:".cyan().bold(),
        profile.soil_type.white(),
        profile.ph.to_string().white(),
        profile.drainage.white(),
        profile.usda_zone.white()
    )?;
    writeln!(
        out,
        "Showing {} of {} crops",
        results.len().to_string().white().bold(),
        catalog_size
    )?;
    writeln!(out)?;

    if results.is_empty() {
        writeln!(out, "{}", "No crops to rank.".yellow())?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:24} {:>7}  {:>5} {:>5} {:>5} {:>5} {:>5}",
        "#", "Crop", "Match", "pH", "Zone", "Soil", "Drain", "Rev"
    )?;

    for (idx, scored) in results.iter().enumerate() {
        let b = &scored.breakdown;
        let score = format!("{:.3}", scored.match_score);
        let score = if scored.match_score >= 0.8 {
            score.green()
        } else if scored.match_score >= 0.5 {
            score.yellow()
        } else {
            score.red()
        };

        writeln!(
            out,
            "{:>4}  {:24} {:>7}  {:>5.2} {:>5.2} {:>5.2} {:>5.2} {:>5.2}",
            idx + 1,
            scored.crop.commodity_type,
            score,
            b.ph,
            b.zone,
            b.soil,
            b.drainage,
            b.revenue
        )?;

        if verbose {
            writeln!(
                out,
                "      {} pH {} | {} | {} | {} | {}",
                scored.crop.genus.dimmed(),
                scored.crop.preferred_ph,
                scored.crop.usda_zones,
                scored.crop.soil_type,
                scored.crop.preferred_soil_drainage,
                scored.crop.revenue_per_acre
            )?;
        }
    }

    Ok(())
}
