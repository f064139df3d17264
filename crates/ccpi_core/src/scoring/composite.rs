//! Weighted composite of the four pillars.
//!
//! `base_index = round(Σ value_i × weight_i)`. Pillar values are already
//! clamped, so with weights summing to 1.0 the base index stays in
//! `[0, 100]` without further clamping.

use crate::error::ConfigurationError;

use super::pillars::{ALL_PILLARS, Pillar, PillarScore};

/// Tolerance for the weight-sum invariant.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Share of the composite carried by each pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarWeights {
    pub momentum: f64,
    pub risk_appetite: f64,
    pub valuation: f64,
    pub macro_: f64,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            momentum: 0.35,
            risk_appetite: 0.30,
            valuation: 0.15,
            macro_: 0.20,
        }
    }
}

impl PillarWeights {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Momentum => self.momentum,
            Pillar::RiskAppetite => self.risk_appetite,
            Pillar::Valuation => self.valuation,
            Pillar::Macro => self.macro_,
        }
    }

    pub fn set(&mut self, pillar: Pillar, weight: f64) {
        match pillar {
            Pillar::Momentum => self.momentum = weight,
            Pillar::RiskAppetite => self.risk_appetite = weight,
            Pillar::Valuation => self.valuation = weight,
            Pillar::Macro => self.macro_ = weight,
        }
    }

    /// Pillar share of the composite as a percentage (e.g. 35.0).
    pub fn percent(&self, pillar: Pillar) -> f64 {
        self.get(pillar) * 100.0
    }

    pub fn sum(&self) -> f64 {
        ALL_PILLARS.iter().map(|&p| self.get(p)).sum()
    }

    /// Each weight in `(0, 1]`, and the four sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for pillar in ALL_PILLARS {
            let weight = self.get(pillar);
            if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
                return Err(ConfigurationError::InvalidWeight { pillar, weight });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigurationError::WeightsDoNotSumToOne { sum });
        }
        Ok(())
    }
}

/// Weighted sums are snapped to millionths before rounding, so a total
/// that is exactly `x.5` in decimal but lands on `x.4999…` in binary still
/// rounds up.
const WEIGHTED_SUM_GRID: f64 = 1e6;

/// Weighted sum of pillar scores, rounded half away from zero.
pub fn base_index(pillars: &[PillarScore]) -> u32 {
    let weighted: f64 = pillars.iter().map(|p| f64::from(p.value) * p.weight).sum();
    let snapped = (weighted * WEIGHTED_SUM_GRID).round() / WEIGHTED_SUM_GRID;
    snapped.round().clamp(0.0, 100.0) as u32
}
