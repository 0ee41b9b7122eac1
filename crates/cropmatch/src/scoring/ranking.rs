//! Ordering of scored crops.

use std::cmp::Ordering;

use crate::model::{CropRecord, QueryProfile, ScoredCrop};

use super::ScoringEngine;

/// Order by match score descending, then revenue score descending.
///
/// Crops equal on both keep their relative order (the sort is stable).
pub fn compare_scored(a: &ScoredCrop, b: &ScoredCrop) -> Ordering {
    b.match_score
        .total_cmp(&a.match_score)
        .then_with(|| b.revenue_score.total_cmp(&a.revenue_score))
}

/// Score every crop and return the full ordered ranking.
pub fn rank<'a>(
    engine: &ScoringEngine,
    crops: impl IntoIterator<Item = &'a CropRecord>,
    profile: &QueryProfile,
) -> Vec<ScoredCrop> {
    let mut scored: Vec<ScoredCrop> = crops
        .into_iter()
        .map(|crop| engine.score(crop, profile))
        .collect();
    scored.sort_by(compare_scored);
    scored
}
