//! Canary signals, certainty and regime classification.

pub mod canary;
pub mod confidence;
pub mod regime;

pub use canary::{
    Canary, CanaryRule, Severity, active_canary_count, canary_order, canary_rules,
    evaluate_rule, generate_canaries,
};
pub use confidence::{CANARY_NORMALIZATION, CertaintyBreakdown, certainty, certainty_breakdown};
pub use regime::{REGIMES, Regime, classify_regime};
