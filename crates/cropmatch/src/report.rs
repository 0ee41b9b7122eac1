//! Rendering ranked results for other tools.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::model::ScoredCrop;

/// One flattened output row.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    rank: usize,
    commodity_type: &'a str,
    genus: &'a str,
    match_score: f64,
    ph_score: f64,
    zone_score: f64,
    soil_score: f64,
    drainage_score: f64,
    revenue_score: f64,
    revenue_per_acre: &'a str,
}

impl<'a> ReportRow<'a> {
    fn new(rank: usize, scored: &'a ScoredCrop) -> Self {
        Self {
            rank,
            commodity_type: &scored.crop.commodity_type,
            genus: &scored.crop.genus,
            match_score: scored.match_score,
            ph_score: scored.breakdown.ph,
            zone_score: scored.breakdown.zone,
            soil_score: scored.breakdown.soil,
            drainage_score: scored.breakdown.drainage,
            revenue_score: scored.revenue_score,
            revenue_per_acre: &scored.crop.revenue_per_acre,
        }
    }
}

/// Write results as CSV with a header row. Ranks start at 1.
pub fn write_csv<W: Write>(results: &[ScoredCrop], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (idx, scored) in results.iter().enumerate() {
        csv_writer.serialize(ReportRow::new(idx + 1, scored))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render results as pretty-printed JSON, including the full crop records.
pub fn to_json(results: &[ScoredCrop]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CropRecord, ScoreBreakdown};

    fn result() -> ScoredCrop {
        ScoredCrop {
            crop: CropRecord {
                commodity_type: "Garlic".to_string(),
                genus: "Allium".to_string(),
                revenue_per_acre: "$10,000 - $20,000".to_string(),
                usda_zones: "4-9".to_string(),
                preferred_soil_drainage: "Well-drained".to_string(),
                preferred_ph: "6.0-7.0".to_string(),
                soil_type: "Loam".to_string(),
            },
            match_score: 0.5,
            revenue_score: 0.25,
            breakdown: ScoreBreakdown {
                ph: 1.0,
                zone: 0.0,
                soil: 0.1,
                drainage: 0.5,
                revenue: 0.25,
            },
        }
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&[result()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some(
                "rank,commodity_type,genus,match_score,ph_score,zone_score,soil_score,\
                 drainage_score,revenue_score,revenue_per_acre"
            )
        );
        assert_eq!(
            lines.next(),
            Some("1,Garlic,Allium,0.5,1.0,0.0,0.1,0.5,0.25,\"$10,000 - $20,000\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_empty() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_to_json_includes_breakdown() {
        let json = to_json(&[result()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["crop"]["commodity_type"], "Garlic");
        assert_eq!(value[0]["breakdown"]["soil"], 0.1);
    }
}
