//! Crop records, query profiles and scored results.

use serde::{Deserialize, Serialize};

/// Number of results returned by a query when no limit is given.
pub const DEFAULT_LIMIT: usize = 20;

/// Number of positional fields a catalog row must carry.
pub const FIELD_COUNT: usize = 7;

/// One row of the crop reference catalog.
///
/// Every field is kept exactly as read from the source. Nothing is coerced to a
/// number at load time; the normalizers interpret the text when a query runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Display name. Not guaranteed unique within a catalog.
    pub commodity_type: String,
    pub genus: String,
    /// Free text, typically `"$X,XXX - $Y,YYY"`.
    pub revenue_per_acre: String,
    /// Free text such as `"Zones 5-9"` or `"5-9"`.
    pub usda_zones: String,
    /// Free text such as `"Well-drained"` or `"Moderate to poor"`.
    pub preferred_soil_drainage: String,
    /// Free text, typically `"6.0-7.5"` with a hyphen or en-dash.
    pub preferred_ph: String,
    /// Free text, possibly compound: `"Sand and Loam"`, `"Clay & Silt"`.
    pub soil_type: String,
}

impl CropRecord {
    /// Build a record from the first seven fields of a parsed row, in column order.
    ///
    /// Returns `None` when fewer than seven fields are present. Extra trailing
    /// fields are ignored.
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        if fields.len() < FIELD_COUNT {
            return None;
        }

        Some(Self {
            commodity_type: fields[0].clone(),
            genus: fields[1].clone(),
            revenue_per_acre: fields[2].clone(),
            usda_zones: fields[3].clone(),
            preferred_soil_drainage: fields[4].clone(),
            preferred_ph: fields[5].clone(),
            soil_type: fields[6].clone(),
        })
    }
}

/// Soil and climate conditions to rank the catalog against.
///
/// Soil type, drainage and pH normally come from an upstream classification of
/// soil-survey data and the zone from a hardiness-zone lookup. They are taken
/// as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryProfile {
    pub soil_type: String,
    pub ph: f64,
    pub drainage: String,
    /// Hardiness zone as text, e.g. `"7"` or `"Zone 7b"`.
    pub usda_zone: String,
    /// Maximum number of results returned by [`CropCatalog::query`](crate::CropCatalog::query).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl QueryProfile {
    /// Create a profile with the default result limit.
    pub fn new(
        soil_type: impl Into<String>,
        ph: f64,
        drainage: impl Into<String>,
        usda_zone: impl Into<String>,
    ) -> Self {
        Self {
            soil_type: soil_type.into(),
            ph,
            drainage: drainage.into(),
            usda_zone: usda_zone.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the maximum number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Per-dimension similarity scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ph: f64,
    pub zone: f64,
    pub soil: f64,
    pub drainage: f64,
    pub revenue: f64,
}

/// A catalog crop together with how well it matches a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub crop: CropRecord,
    /// Weighted composite of the breakdown, in `[0, 1]`.
    pub match_score: f64,
    /// Revenue desirability, used to break ties.
    pub revenue_score: f64,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_fields_is_positional() {
        let row = fields(&[
            "Tomato",
            "Solanum",
            "$20,000-$30,000",
            "5-9",
            "Well-drained",
            "6.0-6.8",
            "Sand",
        ]);
        let record = CropRecord::from_fields(&row).unwrap();

        assert_eq!(record.commodity_type, "Tomato");
        assert_eq!(record.genus, "Solanum");
        assert_eq!(record.revenue_per_acre, "$20,000-$30,000");
        assert_eq!(record.usda_zones, "5-9");
        assert_eq!(record.preferred_soil_drainage, "Well-drained");
        assert_eq!(record.preferred_ph, "6.0-6.8");
        assert_eq!(record.soil_type, "Sand");
    }

    #[test]
    fn test_from_fields_rejects_short_rows() {
        let row = fields(&["Tomato", "Solanum", "$1", "5-9", "Well-drained", "6.0-6.8"]);
        assert!(CropRecord::from_fields(&row).is_none());
    }

    #[test]
    fn test_from_fields_ignores_extra_columns() {
        let row = fields(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let record = CropRecord::from_fields(&row).unwrap();
        assert_eq!(record.soil_type, "G");
    }

    #[test]
    fn test_profile_default_limit() {
        let profile = QueryProfile::new("Loam", 6.5, "Well-drained", "7");
        assert_eq!(profile.limit, DEFAULT_LIMIT);
        assert_eq!(profile.with_limit(3).limit, 3);
    }

    #[test]
    fn test_profile_limit_defaults_when_deserialized() {
        let json = r#"{"soil_type":"Clay","ph":6.0,"drainage":"Poor","usda_zone":"9"}"#;
        let profile: QueryProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.limit, 20);
    }
}
