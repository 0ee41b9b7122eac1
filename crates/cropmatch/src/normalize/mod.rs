//! Field normalizers.
//!
//! Pure functions that interpret the free-text catalog fields. None of them can
//! fail: input that cannot be interpreted yields `None`, the unchanged input, or
//! a neutral value, and the scorer turns that into a low score on the affected
//! dimension.

mod drainage;
mod range;
mod revenue;
mod soil;

pub use drainage::DrainageClass;
pub use range::{extract_zone_number, parse_ph_range, parse_zone_range};
pub use revenue::{calculate_revenue_score, NEUTRAL_REVENUE_SCORE, REVENUE_NORMALIZER};
pub use soil::{extract_soil_components, normalize_soil_name, soil_tokens, CANONICAL_SOILS};
