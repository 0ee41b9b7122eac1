//! Per-crop match scoring.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CropMatchError, Result};
use crate::model::{CropRecord, QueryProfile, ScoreBreakdown, ScoredCrop};
use crate::normalize::{
    calculate_revenue_score, extract_zone_number, parse_ph_range, parse_zone_range, soil_tokens,
    DrainageClass,
};

/// Score lost per pH unit outside the crop's range.
pub const PH_DECAY_PER_UNIT: f64 = 0.5;

/// Score lost per hardiness zone outside the crop's range.
pub const ZONE_DECAY_PER_UNIT: f64 = 0.2;

const ZONE_TEXT_MATCH: f64 = 0.8;
const SOIL_EXACT: f64 = 1.0;
const SOIL_OVERLAP: f64 = 0.9;
const SOIL_DISJOINT: f64 = 0.1;
const DRAINAGE_EXACT: f64 = 1.0;
const DRAINAGE_CONTAINS: f64 = 0.8;
const DRAINAGE_UNKNOWN: f64 = 0.5;

/// Weights of the sub-scores in the composite match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub ph: f64,
    pub zone: f64,
    pub soil: f64,
    pub drainage: f64,
    pub revenue: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ph: 0.35,
            zone: 0.25,
            soil: 0.20,
            drainage: 0.10,
            revenue: 0.10,
        }
    }
}

impl ScoringWeights {
    fn as_array(&self) -> [f64; 5] {
        [self.ph, self.zone, self.soil, self.drainage, self.revenue]
    }

    /// Check that every weight lies in `[0, 1]` and that they sum to 1.
    pub fn validate(&self) -> Result<()> {
        let weights = self.as_array();
        if weights.iter().any(|w| !w.is_finite() || !(0.0..=1.0).contains(w)) {
            return Err(CropMatchError::Config(format!(
                "scoring weights must lie in [0, 1], got {:?}",
                self
            )));
        }

        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(CropMatchError::Config(format!(
                "scoring weights must sum to 1.0, got {:.4}",
                total
            )));
        }

        Ok(())
    }

    /// Weighted sum of a breakdown.
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> f64 {
        self.ph * breakdown.ph
            + self.zone * breakdown.zone
            + self.soil * breakdown.soil
            + self.drainage * breakdown.drainage
            + self.revenue * breakdown.revenue
    }
}

/// Scores crop records against a query profile.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    /// Create an engine with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom weights.
    ///
    /// Fails with [`CropMatchError::Config`] unless the weights pass
    /// [`ScoringWeights::validate`], so every match score stays in `[0, 1]`.
    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compute every sub-score for one crop.
    pub fn breakdown(&self, crop: &CropRecord, profile: &QueryProfile) -> ScoreBreakdown {
        ScoreBreakdown {
            ph: ph_score(profile.ph, &crop.preferred_ph),
            zone: zone_score(&profile.usda_zone, &crop.usda_zones),
            soil: soil_score(&profile.soil_type, &crop.soil_type),
            drainage: drainage_score(&profile.drainage, &crop.preferred_soil_drainage),
            revenue: calculate_revenue_score(&crop.revenue_per_acre),
        }
    }

    /// Score one crop. Never fails; unreadable fields score low on their
    /// dimension.
    pub fn score(&self, crop: &CropRecord, profile: &QueryProfile) -> ScoredCrop {
        let breakdown = self.breakdown(crop, profile);
        ScoredCrop {
            crop: crop.clone(),
            match_score: self.weights.combine(&breakdown),
            revenue_score: breakdown.revenue,
            breakdown,
        }
    }
}

/// Distance from `value` to the nearest bound, or zero when inside.
fn distance_outside(value: f64, low: f64, high: f64) -> f64 {
    if (low..=high).contains(&value) {
        0.0
    } else {
        (value - low).abs().min((value - high).abs())
    }
}

/// pH fit: 1.0 inside the crop's range, then down by 0.5 per unit outside.
pub fn ph_score(ph: f64, crop_ph: &str) -> f64 {
    let Some((low, high)) = parse_ph_range(crop_ph) else {
        return 0.0;
    };

    let distance = distance_outside(ph, low, high);
    if distance == 0.0 {
        1.0
    } else {
        (1.0 - distance * PH_DECAY_PER_UNIT).max(0.0)
    }
}

/// Hardiness zone fit.
///
/// An unreadable query zone scores 0. Against a zone range the score is 1.0
/// inside and drops by 0.2 per zone outside; against zone text that is not a
/// range, containing the query text scores 0.8.
pub fn zone_score(query_zone: &str, crop_zones: &str) -> f64 {
    let Some(zone) = extract_zone_number(query_zone) else {
        return 0.0;
    };

    match parse_zone_range(crop_zones) {
        Some((low, high)) => {
            let distance = distance_outside(zone as f64, low as f64, high as f64);
            if distance == 0.0 {
                1.0
            } else {
                (1.0 - distance * ZONE_DECAY_PER_UNIT).max(0.0)
            }
        }
        None => {
            let needle = query_zone.trim().to_lowercase();
            if crop_zones.to_lowercase().contains(&needle) {
                ZONE_TEXT_MATCH
            } else {
                0.0
            }
        }
    }
}

/// Soil fit: same components in the same order 1.0, any shared component
/// 0.9, otherwise 0.1.
pub fn soil_score(query_soil: &str, crop_soil: &str) -> f64 {
    let query = soil_tokens(query_soil);
    let crop = soil_tokens(crop_soil);

    if query == crop {
        return SOIL_EXACT;
    }

    let query: HashSet<&str> = query.iter().map(String::as_str).collect();
    if crop.iter().any(|token| query.contains(token.as_str())) {
        SOIL_OVERLAP
    } else {
        SOIL_DISJOINT
    }
}

/// Drainage fit.
///
/// Case-insensitive equality scores 1.0 and containment either way 0.8. Else
/// both texts are classified and the lower class value is used; if either
/// cannot be classified the score is 0.5.
pub fn drainage_score(query_drainage: &str, crop_drainage: &str) -> f64 {
    let query = query_drainage.to_lowercase();
    let crop = crop_drainage.to_lowercase();

    if query == crop {
        return DRAINAGE_EXACT;
    }
    if query.contains(&crop) || crop.contains(&query) {
        return DRAINAGE_CONTAINS;
    }

    match (DrainageClass::classify(&query), DrainageClass::classify(&crop)) {
        (Some(a), Some(b)) => a.value().min(b.value()),
        _ => DRAINAGE_UNKNOWN,
    }
}
