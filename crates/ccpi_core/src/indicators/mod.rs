//! Indicator catalog and snapshot resolution.

pub mod catalog;
pub mod snapshot;

pub use catalog::{ALL_INDICATORS, DefaultTable, Indicator, IndicatorKind, TOTAL_INDICATORS};
pub use snapshot::{
    IndicatorSnapshot, RawSnapshot, RawValue, Substitution, SubstitutionCause, format_fingerprint,
};
