//! Resolved indicator snapshot.
//!
//! A [`RawSnapshot`] is whatever the acquisition layer managed to collect.
//! [`IndicatorSnapshot::normalize`] turns it into a fully-populated,
//! immutable snapshot: every catalog entry has exactly one finite value,
//! and every fallback to the default table is recorded.

use std::collections::BTreeMap;

use xxhash_rust::xxh64::xxh64;

use super::catalog::{ALL_INDICATORS, DefaultTable, Indicator, IndicatorKind, TOTAL_INDICATORS};

/// Reading as delivered by a data provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Number(f64),
    Flag(bool),
    Missing,
}

/// Unresolved readings keyed by indicator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSnapshot {
    values: BTreeMap<Indicator, RawValue>,
    /// Keys the feed supplied that are not in the catalog.
    pub unknown_keys: Vec<String>,
}

impl RawSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, indicator: Indicator, value: RawValue) {
        self.values.insert(indicator, value);
    }

    /// Builder-style insert of a numeric reading.
    pub fn with(mut self, indicator: Indicator, value: f64) -> Self {
        self.insert(indicator, RawValue::Number(value));
        self
    }

    /// Builder-style insert of a flag reading.
    pub fn with_flag(mut self, indicator: Indicator, value: bool) -> Self {
        self.insert(indicator, RawValue::Flag(value));
        self
    }

    pub fn get(&self, indicator: Indicator) -> RawValue {
        self.values
            .get(&indicator)
            .copied()
            .unwrap_or(RawValue::Missing)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Why a reading was replaced by its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionCause {
    Missing,
    NonFinite,
    KindMismatch,
}

/// One default substitution applied during normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substitution {
    pub indicator: Indicator,
    pub cause: SubstitutionCause,
    pub default_value: f64,
}

/// Fully-resolved snapshot for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    values: [f64; TOTAL_INDICATORS],
    substitutions: Vec<Substitution>,
}

impl IndicatorSnapshot {
    /// Resolve every catalog entry, falling back to `defaults` where the
    /// raw reading is missing, non-finite, or of the wrong kind.
    pub fn normalize(raw: &RawSnapshot, defaults: &DefaultTable) -> Self {
        let mut values = [0.0; TOTAL_INDICATORS];
        let mut substitutions = Vec::new();

        for &indicator in ALL_INDICATORS {
            let resolved = match (indicator.kind(), raw.get(indicator)) {
                (_, RawValue::Missing) => Err(SubstitutionCause::Missing),
                (IndicatorKind::Number, RawValue::Number(v)) if v.is_finite() => Ok(v),
                (IndicatorKind::Number, RawValue::Number(_)) => Err(SubstitutionCause::NonFinite),
                (IndicatorKind::Number, RawValue::Flag(_)) => Err(SubstitutionCause::KindMismatch),
                (IndicatorKind::Flag, RawValue::Flag(b)) => Ok(if b { 1.0 } else { 0.0 }),
                // Feeds commonly encode flags as 0/1.
                (IndicatorKind::Flag, RawValue::Number(v)) if v == 0.0 || v == 1.0 => Ok(v),
                (IndicatorKind::Flag, RawValue::Number(v)) if !v.is_finite() => {
                    Err(SubstitutionCause::NonFinite)
                }
                (IndicatorKind::Flag, RawValue::Number(_)) => Err(SubstitutionCause::KindMismatch),
            };

            values[indicator.index()] = match resolved {
                Ok(v) => v,
                Err(cause) => {
                    let default_value = defaults.get(indicator);
                    substitutions.push(Substitution {
                        indicator,
                        cause,
                        default_value,
                    });
                    default_value
                }
            };
        }

        Self {
            values,
            substitutions,
        }
    }

    /// Snapshot where every indicator sits at its documented default.
    pub fn baseline() -> Self {
        Self::normalize(&RawSnapshot::new(), &DefaultTable::documented())
    }

    pub fn value(&self, indicator: Indicator) -> f64 {
        self.values[indicator.index()]
    }

    pub fn flag(&self, indicator: Indicator) -> bool {
        self.values[indicator.index()] != 0.0
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Deterministic xxh64 fingerprint of the resolved values.
    ///
    /// Values are hashed by bit pattern in catalog order, separated by
    /// `0xFF` so adjacent fields cannot alias.
    pub fn fingerprint(&self) -> u64 {
        let mut buf = Vec::with_capacity(TOTAL_INDICATORS * 9);
        for value in &self.values {
            buf.extend_from_slice(&value.to_bits().to_le_bytes());
            buf.push(0xFF);
        }
        xxh64(&buf, 0)
    }
}

/// Format a snapshot fingerprint as 16 lower-case hex characters.
pub fn format_fingerprint(hash: u64) -> String {
    format!("{hash:016x}")
}
