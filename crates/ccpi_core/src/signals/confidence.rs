//! Certainty score: agreement between pillars plus canary density.
//!
//! - `variance_alignment = max(0, 100 - stddev × 3)` over the pillar values
//!   (population standard deviation).
//! - `canary_agreement = min(100, active / 15 × 100)`.
//! - `certainty = round(0.7 × variance_alignment + 0.3 × canary_agreement)`.

use crate::scoring::PillarScore;

/// Expected maximum number of concurrently active canaries.
pub const CANARY_NORMALIZATION: f64 = 15.0;

const STDDEV_PENALTY: f64 = 3.0;
const VARIANCE_SHARE: f64 = 0.7;
const CANARY_SHARE: f64 = 0.3;

/// Intermediate terms of the certainty score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CertaintyBreakdown {
    pub mean: f64,
    pub std_dev: f64,
    pub variance_alignment: f64,
    pub canary_agreement: f64,
    pub certainty: u32,
}

pub fn certainty_breakdown(pillars: &[PillarScore], active_canaries: usize) -> CertaintyBreakdown {
    let n = pillars.len().max(1) as f64;
    let mean = pillars.iter().map(|p| f64::from(p.value)).sum::<f64>() / n;
    let variance = pillars
        .iter()
        .map(|p| (f64::from(p.value) - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    let variance_alignment = (100.0 - std_dev * STDDEV_PENALTY).max(0.0);
    let canary_agreement = (active_canaries as f64 / CANARY_NORMALIZATION * 100.0).min(100.0);
    let certainty = (variance_alignment * VARIANCE_SHARE + canary_agreement * CANARY_SHARE)
        .round()
        .clamp(0.0, 100.0) as u32;

    CertaintyBreakdown {
        mean,
        std_dev,
        variance_alignment,
        canary_agreement,
        certainty,
    }
}

/// Certainty in `[0, 100]`.
pub fn certainty(pillars: &[PillarScore], active_canaries: usize) -> u32 {
    certainty_breakdown(pillars, active_canaries).certainty
}
