//! Inspect command - load a catalog and report what was read.

use colored::Colorize;
use cropmatch::CatalogConfig;

use super::{open_catalog, CommandResult};

pub fn run(
    config: &CatalogConfig,
    source: String,
    json_output: bool,
    verbose: bool,
) -> CommandResult {
    let catalog = open_catalog(&source, config)?;

    if json_output {
        let status = serde_json::json!({
            "source": catalog.metadata(),
            "records": catalog.len(),
            "skipped": catalog.skipped(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{} {}", "Catalog".cyan().bold(), source.white());
    if let Some(metadata) = catalog.metadata() {
        if let Some(path) = &metadata.path {
            println!("  Path:    {}", path.display());
        }
        println!("  Size:    {} bytes", metadata.size_bytes);
        println!("  Hash:    {}", metadata.hash.dimmed());
        println!("  Loaded:  {}", metadata.loaded_at.to_rfc3339());
    }
    println!("  Records: {}", catalog.len().to_string().white().bold());

    let skipped = catalog.skipped();
    if skipped.is_empty() {
        println!("  Skipped: {}", "0".green());
    } else {
        println!("  Skipped: {}", skipped.len().to_string().yellow());
        for row in skipped {
            println!(
                "    line {:>5}: {} fields  {}",
                row.line,
                row.field_count,
                row.content.dimmed()
            );
        }
    }

    if verbose {
        println!();
        for record in catalog.records() {
            println!(
                "  {:24} pH {:10} {:14} {:20} {}",
                record.commodity_type,
                record.preferred_ph,
                record.usda_zones,
                record.soil_type,
                record.preferred_soil_drainage
            );
        }
    }

    Ok(())
}
