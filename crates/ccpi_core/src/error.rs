//! Configuration errors.
//!
//! The scoring pipeline itself never fails on a resolved snapshot. These
//! errors are raised when engine settings are validated, before any
//! evaluation runs, and are fatal for the deployment that produced them.

use std::fmt;

use crate::indicators::Indicator;
use crate::scoring::Pillar;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Pillar weights must sum to exactly 1.0 (within 1e-9).
    WeightsDoNotSumToOne { sum: f64 },
    /// A pillar weight is outside `(0, 1]` or non-finite.
    InvalidWeight { pillar: Pillar, weight: f64 },
    /// A default substitution value is non-finite, zero, of the wrong kind,
    /// or would itself score points or raise a canary.
    InvalidDefault { indicator: Indicator, value: f64 },
    /// A staircase or canary table is malformed.
    MalformedLadder {
        indicator: Indicator,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightsDoNotSumToOne { sum } => {
                write!(f, "pillar weights sum to {sum}, expected 1.0")
            }
            Self::InvalidWeight { pillar, weight } => {
                write!(f, "pillar '{}' has invalid weight {weight}", pillar.key())
            }
            Self::InvalidDefault { indicator, value } => {
                write!(f, "indicator '{}' has invalid default {value}", indicator.key())
            }
            Self::MalformedLadder { indicator, reason } => {
                write!(f, "indicator '{}' ladder malformed: {reason}", indicator.key())
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
