//! Certainty estimator and regime classifier tests.

use ccpi_core::scoring::{Pillar, PillarScore};
use ccpi_core::signals::{REGIMES, certainty, certainty_breakdown, classify_regime};

fn pillars(values: [u32; 4]) -> Vec<PillarScore> {
    let order = [
        Pillar::Momentum,
        Pillar::RiskAppetite,
        Pillar::Valuation,
        Pillar::Macro,
    ];
    order
        .into_iter()
        .zip(values)
        .map(|(pillar, value)| PillarScore {
            pillar,
            value,
            weight: 0.25,
            raw_total: value,
            contributions: Vec::new(),
        })
        .collect()
}

// ─── Certainty ──────────────────────────────────────────────────────────

#[test]
fn test_certainty_baseline_pillars() {
    // mean 0.5, population stddev sqrt(0.75)
    let b = certainty_breakdown(&pillars([0, 0, 2, 0]), 0);
    assert!((b.mean - 0.5).abs() < 1e-12);
    assert!((b.std_dev - 0.75_f64.sqrt()).abs() < 1e-12);
    assert_eq!(b.canary_agreement, 0.0);
    assert_eq!(b.certainty, 68);
}

#[test]
fn test_certainty_mixed_pillars_with_canaries() {
    let b = certainty_breakdown(&pillars([21, 13, 2, 0]), 5);
    assert!((b.mean - 9.0).abs() < 1e-12);
    assert!((b.std_dev - 72.5_f64.sqrt()).abs() < 1e-12);
    assert!((b.canary_agreement - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(b.certainty, 62);
}

#[test]
fn test_certainty_full_agreement_is_100() {
    assert_eq!(certainty(&pillars([70, 70, 70, 70]), 15), 100);
    // Canary agreement saturates past the normalization constant.
    assert_eq!(certainty(&pillars([70, 70, 70, 70]), 30), 100);
}

#[test]
fn test_variance_alignment_floors_at_zero() {
    // stddev = 50 -> 100 - 150 < 0
    let b = certainty_breakdown(&pillars([100, 0, 100, 0]), 0);
    assert_eq!(b.variance_alignment, 0.0);
    assert_eq!(b.certainty, 0);
}

// ─── Regime ─────────────────────────────────────────────────────────────

#[test]
fn test_regime_boundaries() {
    let r = classify_regime(19);
    assert_eq!((r.level, r.name), (1, "Low Risk"));

    let r = classify_regime(20);
    assert_eq!((r.level, r.name), (2, "Normal"));

    let r = classify_regime(39);
    assert_eq!(r.level, 2);

    let r = classify_regime(40);
    assert_eq!((r.level, r.name), (3, "Elevated Risk"));

    let r = classify_regime(60);
    assert_eq!((r.level, r.name), (4, "High Alert"));

    let r = classify_regime(79);
    assert_eq!(r.level, 4);

    let r = classify_regime(80);
    assert_eq!((r.level, r.name), (5, "Crash Watch"));

    let r = classify_regime(100);
    assert_eq!(r.level, 5);

    let r = classify_regime(0);
    assert_eq!(r.level, 1);
}

#[test]
fn test_regime_table_carries_display_fields() {
    for regime in REGIMES {
        assert!(!regime.name.is_empty());
        assert!(!regime.color.is_empty());
        assert!(!regime.description.is_empty());
    }
    assert_eq!(classify_regime(85).color, "red");
    assert_eq!(classify_regime(5).color, "green");
}
