//! Stage-boundary observability.
//!
//! Scoring stays pure; the pipeline reports what happened at each stage
//! boundary through a [`PipelineObserver`]. Callers pick the sink:
//! [`NoopObserver`], [`TracingObserver`] (structured `tracing` events) or
//! [`PipelineMetrics`] (in-process counters).

use std::sync::atomic::{AtomicU64, Ordering};

use crate::indicators::Substitution;
use crate::scoring::{CrashAmplifier, PillarScore};
use crate::signals::{Canary, Severity};

/// Receives one callback per pipeline event. All methods default to no-op.
pub trait PipelineObserver {
    fn on_substitution(&mut self, _substitution: &Substitution) {}
    fn on_pillar_scored(&mut self, _score: &PillarScore) {}
    fn on_amplifier(&mut self, _amplifier: &CrashAmplifier) {}
    fn on_amplifier_cap(&mut self, _raw_bonus: u32) {}
    fn on_canary(&mut self, _canary: &Canary) {}
    fn on_index(&mut self, _base_index: u32, _total_bonus: u32, _final_index: u32) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Emits each event as a `tracing` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_substitution(&mut self, s: &Substitution) {
        tracing::warn!(
            indicator = s.indicator.key(),
            cause = ?s.cause,
            default_value = s.default_value,
            "indicator defaulted"
        );
    }

    fn on_pillar_scored(&mut self, score: &PillarScore) {
        tracing::debug!(
            pillar = score.pillar.key(),
            value = score.value,
            raw_total = score.raw_total,
            weight = score.weight,
            "pillar scored"
        );
    }

    fn on_amplifier(&mut self, amplifier: &CrashAmplifier) {
        tracing::debug!(
            reason = %amplifier.reason,
            points = amplifier.points,
            "crash amplifier triggered"
        );
    }

    fn on_amplifier_cap(&mut self, raw_bonus: u32) {
        tracing::debug!(raw_bonus, "crash amplifier bonus capped");
    }

    fn on_canary(&mut self, canary: &Canary) {
        tracing::debug!(
            indicator = canary.indicator.key(),
            pillar = canary.pillar.key(),
            severity = canary.severity.as_str(),
            impact_score = canary.impact_score,
            "canary emitted"
        );
    }

    fn on_index(&mut self, base_index: u32, total_bonus: u32, final_index: u32) {
        tracing::debug!(base_index, total_bonus, final_index, "index computed");
    }
}

/// Counters for pipeline outcomes.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    evaluations_total: u64,
    substitutions_total: u64,
    amplifiers_total: u64,
    amplifier_caps_total: u64,
    canaries_high_total: u64,
    canaries_medium_total: u64,
    canaries_low_total: u64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluations_total(&self) -> u64 {
        self.evaluations_total
    }

    pub fn substitutions_total(&self) -> u64 {
        self.substitutions_total
    }

    pub fn amplifiers_total(&self) -> u64 {
        self.amplifiers_total
    }

    pub fn amplifier_caps_total(&self) -> u64 {
        self.amplifier_caps_total
    }

    pub fn canaries_total(&self, severity: Severity) -> u64 {
        match severity {
            Severity::High => self.canaries_high_total,
            Severity::Medium => self.canaries_medium_total,
            Severity::Low => self.canaries_low_total,
        }
    }
}

impl PipelineObserver for PipelineMetrics {
    fn on_substitution(&mut self, _substitution: &Substitution) {
        self.substitutions_total += 1;
    }

    fn on_amplifier(&mut self, amplifier: &CrashAmplifier) {
        // The cap note carries zero points and is counted separately.
        if amplifier.points > 0 {
            self.amplifiers_total += 1;
        }
    }

    fn on_amplifier_cap(&mut self, _raw_bonus: u32) {
        self.amplifier_caps_total += 1;
    }

    fn on_canary(&mut self, canary: &Canary) {
        match canary.severity {
            Severity::High => self.canaries_high_total += 1,
            Severity::Medium => self.canaries_medium_total += 1,
            Severity::Low => self.canaries_low_total += 1,
        }
    }

    fn on_index(&mut self, _base_index: u32, _total_bonus: u32, _final_index: u32) {
        self.evaluations_total += 1;
    }
}

/// Fan events out to two observers.
impl<A: PipelineObserver, B: PipelineObserver> PipelineObserver for (A, B) {
    fn on_substitution(&mut self, s: &Substitution) {
        self.0.on_substitution(s);
        self.1.on_substitution(s);
    }

    fn on_pillar_scored(&mut self, score: &PillarScore) {
        self.0.on_pillar_scored(score);
        self.1.on_pillar_scored(score);
    }

    fn on_amplifier(&mut self, amplifier: &CrashAmplifier) {
        self.0.on_amplifier(amplifier);
        self.1.on_amplifier(amplifier);
    }

    fn on_amplifier_cap(&mut self, raw_bonus: u32) {
        self.0.on_amplifier_cap(raw_bonus);
        self.1.on_amplifier_cap(raw_bonus);
    }

    fn on_canary(&mut self, canary: &Canary) {
        self.0.on_canary(canary);
        self.1.on_canary(canary);
    }

    fn on_index(&mut self, base_index: u32, total_bonus: u32, final_index: u32) {
        self.0.on_index(base_index, total_bonus, final_index);
        self.1.on_index(base_index, total_bonus, final_index);
    }
}

static EVALUATIONS_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Process-wide count of completed evaluations.
pub fn evaluations_total() -> u64 {
    EVALUATIONS_TOTAL.load(Ordering::Relaxed)
}

pub(crate) fn bump_evaluations_total() {
    EVALUATIONS_TOTAL.fetch_add(1, Ordering::Relaxed);
}
