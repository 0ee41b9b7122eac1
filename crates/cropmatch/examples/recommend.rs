//! Example: Recommend crops for a soil profile.
//!
//! Usage:
//!   cargo run --example recommend -- <catalog.csv> <soil> <ph> <drainage> <zone>
//!
//! Example:
//!   cargo run --example recommend -- resources/crops.csv "Sandy loam" 6.2 Well-drained 7

use std::env;

use cropmatch::{CatalogConfig, CropCatalog, QueryProfile};

fn main() -> cropmatch::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 6 {
        eprintln!("Usage: cargo run --example recommend -- <catalog.csv> <soil> <ph> <drainage> <zone>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example recommend -- resources/crops.csv \"Sandy loam\" 6.2 Well-drained 7");
        std::process::exit(1);
    }

    let Ok(ph) = args[3].parse::<f64>() else {
        eprintln!("Error: pH must be a number, got '{}'", args[3]);
        std::process::exit(1);
    };

    let catalog = CropCatalog::load_path(&args[1], &CatalogConfig::default())?;
    let profile = QueryProfile::new(&args[2], ph, &args[4], &args[5]).with_limit(10);

    let separator = "=".repeat(72);
    println!("{}", separator);
    println!(
        "Top crops for {} soil, pH {}, {}, zone {}",
        profile.soil_type, profile.ph, profile.drainage, profile.usda_zone
    );
    println!("{}", separator);

    for (idx, scored) in catalog.query(&profile).iter().enumerate() {
        let b = &scored.breakdown;
        println!(
            "{:>2}. {:20} {:.3}  (pH {:.2}, zone {:.2}, soil {:.2}, drainage {:.2}, revenue {:.2})",
            idx + 1,
            scored.crop.commodity_type,
            scored.match_score,
            b.ph,
            b.zone,
            b.soil,
            b.drainage,
            b.revenue
        );
    }

    if !catalog.skipped().is_empty() {
        println!();
        println!("{} malformed rows were skipped", catalog.skipped().len());
    }

    Ok(())
}
