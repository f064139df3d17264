//! CCPI evaluation pipeline.
//!
//! snapshot -> pillars (x4) -> base index -> amplifiers -> final index
//! -> canaries -> certainty -> regime
//!
//! Every stage is a pure function of its inputs. Pillars and amplifiers do
//! not depend on each other; canaries, certainty and regime consume earlier
//! outputs. Nothing here performs I/O or retries.

use crate::error::ConfigurationError;
use crate::indicators::{
    ALL_INDICATORS, DefaultTable, Indicator, IndicatorKind, IndicatorSnapshot, RawSnapshot,
    TOTAL_INDICATORS,
};
use crate::observe::{NoopObserver, PipelineObserver, bump_evaluations_total};
use crate::scoring::{
    ALL_PILLARS, CrashAmplifier, PillarScore, PillarWeights, YieldCurvePolicy, base_index,
    detect_crash_amplifiers, final_index, pillar_entries, score_pillar,
};
use crate::signals::{
    Canary, Regime, active_canary_count, canary_rules, certainty, classify_regime,
    generate_canaries,
};

/// Engine configuration. `Default` carries the published methodology.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineSettings {
    pub weights: PillarWeights,
    pub yield_curve: YieldCurvePolicy,
    pub defaults: DefaultTable,
}

impl EngineSettings {
    /// Fail-closed check of weights, default table and staircase tables.
    ///
    /// Run once at startup; evaluation assumes validated settings.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.weights.validate()?;
        for &indicator in ALL_INDICATORS {
            let value = self.defaults.get(indicator);
            if !is_baseline_default(indicator, value) {
                return Err(ConfigurationError::InvalidDefault { indicator, value });
            }
        }
        validate_catalog()
    }
}

/// A default must be a calm baseline: non-zero for numeric indicators,
/// on the `else` path of every staircase that scores it, and outside
/// every canary tier.
fn is_baseline_default(indicator: Indicator, value: f64) -> bool {
    let well_formed = match indicator.kind() {
        IndicatorKind::Number => value.is_finite() && value != 0.0,
        IndicatorKind::Flag => value == 0.0 || value == 1.0,
    };
    if !well_formed {
        return false;
    }

    let scores_otherwise = ALL_PILLARS
        .iter()
        .flat_map(|&pillar| pillar_entries(pillar))
        .filter(|entry| entry.indicator == indicator)
        .all(|entry| entry.ladder.points(value) == entry.ladder.otherwise);

    let canary_quiet = canary_rules()
        .iter()
        .filter(|rule| rule.indicator == indicator)
        .all(|rule| !rule.high.iter().chain(rule.medium).any(|c| c.matches(value)));

    scores_otherwise && canary_quiet
}

/// Check every pillar staircase and canary table.
pub fn validate_catalog() -> Result<(), ConfigurationError> {
    for pillar in ALL_PILLARS {
        for entry in pillar_entries(pillar) {
            entry
                .ladder
                .check()
                .map_err(|reason| ConfigurationError::MalformedLadder {
                    indicator: entry.indicator,
                    reason,
                })?;
        }
    }
    for rule in canary_rules() {
        let malformed = |reason| ConfigurationError::MalformedLadder {
            indicator: rule.indicator,
            reason,
        };
        if rule.high.is_empty() {
            return Err(malformed("canary has no high tier"));
        }
        if rule
            .high
            .iter()
            .chain(rule.medium)
            .any(|c| !c.threshold.is_finite())
        {
            return Err(malformed("canary threshold non-finite"));
        }
        let scored = pillar_entries(rule.pillar)
            .iter()
            .any(|e| e.indicator == rule.indicator);
        if !scored {
            return Err(malformed("canary pillar does not score indicator"));
        }
    }
    Ok(())
}

/// One evaluation's output. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeResult {
    pub base_index: u32,
    pub amplifiers: Vec<CrashAmplifier>,
    pub total_bonus: u32,
    /// `min(100, base_index + total_bonus)`.
    pub final_index: u32,
    pub certainty: u32,
    pub regime: Regime,
    /// Momentum, Risk Appetite, Valuation, Macro, in that order.
    pub pillars: Vec<PillarScore>,
    /// Sorted by severity, then impact.
    pub canaries: Vec<Canary>,
    pub active_canaries: usize,
    pub total_indicators: usize,
    pub snapshot_hash: u64,
    /// Keys of indicators that fell back to their default.
    pub substituted: Vec<&'static str>,
}

/// Normalize `raw` with the configured default table, then evaluate.
pub fn evaluate_raw(
    raw: &RawSnapshot,
    settings: &EngineSettings,
    observer: &mut impl PipelineObserver,
) -> CompositeResult {
    let snapshot = IndicatorSnapshot::normalize(raw, &settings.defaults);
    evaluate_with(&snapshot, settings, observer)
}

/// Evaluate a resolved snapshot without observation.
pub fn evaluate(snapshot: &IndicatorSnapshot, settings: &EngineSettings) -> CompositeResult {
    evaluate_with(snapshot, settings, &mut NoopObserver)
}

/// Evaluate a resolved snapshot, reporting each stage to `observer`.
pub fn evaluate_with(
    snapshot: &IndicatorSnapshot,
    settings: &EngineSettings,
    observer: &mut impl PipelineObserver,
) -> CompositeResult {
    for substitution in snapshot.substitutions() {
        observer.on_substitution(substitution);
    }

    let pillars: Vec<PillarScore> = ALL_PILLARS
        .iter()
        .map(|&p| score_pillar(p, settings.weights.get(p), snapshot, settings.yield_curve))
        .collect();
    for score in &pillars {
        observer.on_pillar_scored(score);
    }

    let base = base_index(&pillars);

    let amplifier_set = detect_crash_amplifiers(snapshot);
    for amplifier in &amplifier_set.amplifiers {
        observer.on_amplifier(amplifier);
    }
    if amplifier_set.capped() {
        observer.on_amplifier_cap(amplifier_set.raw_bonus);
    }

    let final_idx = final_index(base, amplifier_set.total_bonus);
    observer.on_index(base, amplifier_set.total_bonus, final_idx);

    let canaries = generate_canaries(snapshot, &settings.weights, settings.yield_curve);
    for canary in &canaries {
        observer.on_canary(canary);
    }
    let active = active_canary_count(&canaries);

    bump_evaluations_total();

    CompositeResult {
        base_index: base,
        total_bonus: amplifier_set.total_bonus,
        amplifiers: amplifier_set.amplifiers,
        final_index: final_idx,
        certainty: certainty(&pillars, active),
        regime: classify_regime(final_idx),
        pillars,
        canaries,
        active_canaries: active,
        total_indicators: TOTAL_INDICATORS,
        snapshot_hash: snapshot.fingerprint(),
        substituted: snapshot
            .substitutions()
            .iter()
            .map(|s| s.indicator.key())
            .collect(),
    }
}
