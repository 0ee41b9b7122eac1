//! Crop scoring and ranking.

mod engine;
mod ranking;

pub use engine::{
    drainage_score, ph_score, soil_score, zone_score, ScoringEngine, ScoringWeights,
    PH_DECAY_PER_UNIT, ZONE_DECAY_PER_UNIT,
};
pub use ranking::{compare_scored, rank};
