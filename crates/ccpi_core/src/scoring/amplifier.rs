//! Crash amplifiers.
//!
//! Acute, short-horizon conditions add bonus points straight onto the base
//! index, outside the pillar weighting. Distinct conditions stack; within a
//! condition only its most extreme tier fires. The total is capped at
//! [`AMPLIFIER_CAP`]; when the cap bites a zero-point note is appended.

use crate::indicators::{Indicator, IndicatorSnapshot};

/// Upper bound on the summed amplifier bonus.
pub const AMPLIFIER_CAP: u32 = 100;

/// One triggered amplifier rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashAmplifier {
    pub reason: String,
    pub points: u32,
}

/// Triggered amplifiers plus the capped bonus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmplifierSet {
    pub amplifiers: Vec<CrashAmplifier>,
    /// Sum of amplifier points before the cap.
    pub raw_bonus: u32,
    /// `min(raw_bonus, AMPLIFIER_CAP)`.
    pub total_bonus: u32,
}

impl AmplifierSet {
    pub fn capped(&self) -> bool {
        self.raw_bonus > AMPLIFIER_CAP
    }
}

fn spx_crash(snapshot: &IndicatorSnapshot) -> Option<CrashAmplifier> {
    let ret = snapshot.value(Indicator::SpxReturn1d);
    let points = if ret <= -9.0 {
        40
    } else if ret <= -6.0 {
        25
    } else {
        return None;
    };
    Some(CrashAmplifier {
        reason: format!("S&P 500 1-day crash ({ret:.2}%)"),
        points,
    })
}

fn spx_below_50dma(snapshot: &IndicatorSnapshot) -> Option<CrashAmplifier> {
    (snapshot.value(Indicator::Spx50dmaBreach) >= 100.0).then(|| CrashAmplifier {
        reason: "S&P 500 broke below its 50-day moving average".to_string(),
        points: 20,
    })
}

fn vix_spike(snapshot: &IndicatorSnapshot) -> Option<CrashAmplifier> {
    let vix = snapshot.value(Indicator::Vix);
    (vix > 35.0).then(|| CrashAmplifier {
        reason: format!("VIX spike to {vix:.1}"),
        points: 20,
    })
}

fn put_call_panic(snapshot: &IndicatorSnapshot) -> Option<CrashAmplifier> {
    let ratio = snapshot.value(Indicator::PutCallRatio);
    (ratio > 1.3).then(|| CrashAmplifier {
        reason: format!("Put/Call panic hedging ({ratio:.2})"),
        points: 15,
    })
}

fn yield_curve_inverted(snapshot: &IndicatorSnapshot) -> Option<CrashAmplifier> {
    let spread = snapshot.value(Indicator::YieldCurve10y2y);
    (spread < 0.0).then(|| CrashAmplifier {
        reason: format!("Yield curve inverted ({spread:.2}%)"),
        points: 15,
    })
}

type Rule = fn(&IndicatorSnapshot) -> Option<CrashAmplifier>;

const RULES: &[Rule] = &[
    spx_crash,
    spx_below_50dma,
    vix_spike,
    put_call_panic,
    yield_curve_inverted,
];

/// Evaluate every amplifier rule against the snapshot.
pub fn detect_crash_amplifiers(snapshot: &IndicatorSnapshot) -> AmplifierSet {
    let mut amplifiers: Vec<CrashAmplifier> =
        RULES.iter().filter_map(|rule| rule(snapshot)).collect();
    let raw_bonus: u32 = amplifiers.iter().map(|a| a.points).sum();
    let total_bonus = raw_bonus.min(AMPLIFIER_CAP);

    if raw_bonus > AMPLIFIER_CAP {
        amplifiers.push(CrashAmplifier {
            reason: format!("Amplifier bonus capped at {AMPLIFIER_CAP} (raw {raw_bonus})"),
            points: 0,
        });
    }

    AmplifierSet {
        amplifiers,
        raw_bonus,
        total_bonus,
    }
}

/// `min(100, base_index + total_bonus)`.
pub fn final_index(base_index: u32, total_bonus: u32) -> u32 {
    base_index.saturating_add(total_bonus).min(100)
}
