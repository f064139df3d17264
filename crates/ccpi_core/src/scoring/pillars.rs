//! Pillar scorers.
//!
//! Each pillar owns an ordered set of (indicator, staircase) entries. A
//! pillar score is built by mapping the snapshot to an immutable list of
//! [`Contribution`]s and reducing it; the reduced total is clamped to
//! `[0, 100]`. The per-pillar staircase weights intentionally sum past 100
//! so that extreme co-occurrence saturates the scale.

use crate::indicators::{Indicator, IndicatorSnapshot};

use super::ladder::{Condition as C, Ladder, Tier as T};

/// Maximum pillar score.
pub const PILLAR_MAX: u32 = 100;

/// The four weighted sub-scores of the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pillar {
    Momentum,
    RiskAppetite,
    Valuation,
    Macro,
}

pub const ALL_PILLARS: [Pillar; 4] = [
    Pillar::Momentum,
    Pillar::RiskAppetite,
    Pillar::Valuation,
    Pillar::Macro,
];

impl Pillar {
    /// Display name, as carried on canaries.
    pub fn name(self) -> &'static str {
        match self {
            Pillar::Momentum => "Momentum & Technical",
            Pillar::RiskAppetite => "Risk Appetite & Volatility",
            Pillar::Valuation => "Valuation & Market Structure",
            Pillar::Macro => "Macro",
        }
    }

    /// camelCase key used in configuration and output.
    pub fn key(self) -> &'static str {
        match self {
            Pillar::Momentum => "momentum",
            Pillar::RiskAppetite => "riskAppetite",
            Pillar::Valuation => "valuation",
            Pillar::Macro => "macro",
        }
    }

    pub fn from_key(key: &str) -> Option<Pillar> {
        ALL_PILLARS.into_iter().find(|p| p.key() == key)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// How the 10Y-2Y spread is attributed.
///
/// The spread is a single reading but has historically been scored under
/// both Momentum and Risk Appetite with different staircases. `DualSignal`
/// keeps both attributions as two distinct signals; the single-pillar
/// policies drop the other attribution from scoring and canaries alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YieldCurvePolicy {
    #[default]
    DualSignal,
    MomentumOnly,
    RiskAppetiteOnly,
}

impl YieldCurvePolicy {
    /// Whether the yield curve attribution to `pillar` is active.
    pub fn attributes_to(self, pillar: Pillar) -> bool {
        match (self, pillar) {
            (YieldCurvePolicy::DualSignal, Pillar::Momentum | Pillar::RiskAppetite) => true,
            (YieldCurvePolicy::MomentumOnly, Pillar::Momentum) => true,
            (YieldCurvePolicy::RiskAppetiteOnly, Pillar::RiskAppetite) => true,
            _ => false,
        }
    }

    /// Whether `indicator` is scored under `pillar` under this policy.
    pub fn includes(self, pillar: Pillar, indicator: Indicator) -> bool {
        indicator != Indicator::YieldCurve10y2y || self.attributes_to(pillar)
    }
}

/// An indicator's staircase within one pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarEntry {
    pub indicator: Indicator,
    pub ladder: Ladder,
}

const fn entry(indicator: Indicator, tiers: &'static [T], otherwise: u32) -> PillarEntry {
    PillarEntry {
        indicator,
        ladder: Ladder::new(tiers, otherwise),
    }
}

const MOMENTUM: &[PillarEntry] = &[
    entry(
        Indicator::SpxReturn1d,
        &[
            T::new(C::le(-6.0), 8),
            T::new(C::le(-3.0), 6),
            T::new(C::le(-1.5), 4),
            T::new(C::le(-1.0), 2),
        ],
        0,
    ),
    entry(
        Indicator::Vix,
        &[
            T::new(C::gt(35.0), 9),
            T::new(C::gt(25.0), 6),
            T::new(C::gt(20.0), 4),
            T::new(C::gt(15.0), 2),
        ],
        0,
    ),
    entry(
        Indicator::Spx200dmaBreach,
        &[
            T::new(C::ge(100.0), 10),
            T::new(C::ge(50.0), 7),
            T::new(C::ge(25.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::Spx50dmaBreach,
        &[
            T::new(C::ge(100.0), 8),
            T::new(C::ge(50.0), 5),
            T::new(C::ge(25.0), 2),
        ],
        0,
    ),
    entry(
        Indicator::NdxReturn1d,
        &[
            T::new(C::le(-7.0), 7),
            T::new(C::le(-4.0), 5),
            T::new(C::le(-2.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::Ndx200dmaBreach,
        &[
            T::new(C::ge(100.0), 9),
            T::new(C::ge(50.0), 6),
            T::new(C::ge(25.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::Ndx50dmaBreach,
        &[
            T::new(C::ge(100.0), 7),
            T::new(C::ge(50.0), 4),
            T::new(C::ge(25.0), 2),
        ],
        0,
    ),
    entry(
        Indicator::Rsi14,
        &[
            T::new(C::gt(80.0), 7),
            T::new(C::gt(75.0), 5),
            T::new(C::gt(70.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::AtrPct,
        &[
            T::new(C::gt(4.0), 8),
            T::new(C::gt(3.0), 5),
            T::new(C::gt(2.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::BreadthAbove200dma,
        &[
            T::new(C::lt(20.0), 10),
            T::new(C::lt(30.0), 7),
            T::new(C::lt(40.0), 4),
            T::new(C::lt(50.0), 2),
        ],
        0,
    ),
    entry(
        Indicator::VixTermRatio,
        &[
            T::new(C::gt(1.10), 9),
            T::new(C::gt(1.0), 6),
            T::new(C::gt(0.95), 3),
        ],
        0,
    ),
    entry(
        Indicator::YieldCurve10y2y,
        &[
            T::new(C::lt(-0.5), 6),
            T::new(C::lt(0.0), 4),
            T::new(C::lt(0.25), 2),
        ],
        0,
    ),
    entry(
        Indicator::SpxDrawdown,
        &[
            T::new(C::ge(20.0), 10),
            T::new(C::ge(10.0), 7),
            T::new(C::ge(5.0), 3),
        ],
        0,
    ),
];

const RISK_APPETITE: &[PillarEntry] = &[
    // Low put/call is complacency; very high put/call is contrarian fear.
    entry(
        Indicator::PutCallRatio,
        &[
            T::new(C::lt(0.6), 18),
            T::new(C::lt(0.7), 14),
            T::new(C::lt(0.9), 10),
            T::new(C::gt(1.3), 8),
            T::new(C::gt(1.1), 4),
        ],
        0,
    ),
    entry(
        Indicator::RetailBullishPct,
        &[
            T::new(C::gt(55.0), 16),
            T::new(C::gt(50.0), 12),
            T::new(C::gt(45.0), 8),
            T::new(C::lt(25.0), 6),
            T::new(C::lt(30.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::FearGreed,
        &[
            T::new(C::gt(80.0), 12),
            T::new(C::gt(70.0), 8),
            T::new(C::lt(20.0), 6),
            T::new(C::lt(30.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::MarginDebtYoy,
        &[
            T::new(C::gt(40.0), 14),
            T::new(C::gt(25.0), 10),
            T::new(C::gt(15.0), 6),
        ],
        0,
    ),
    entry(
        Indicator::HighYieldSpread,
        &[
            T::new(C::gt(8.0), 14),
            T::new(C::gt(6.0), 10),
            T::new(C::gt(5.0), 6),
            T::new(C::gt(4.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::SkewIndex,
        &[
            T::new(C::gt(150.0), 10),
            T::new(C::gt(140.0), 7),
            T::new(C::gt(130.0), 4),
        ],
        0,
    ),
    entry(
        Indicator::ShortInterestPct,
        &[T::new(C::lt(1.5), 8), T::new(C::lt(2.0), 5)],
        0,
    ),
    entry(
        Indicator::InsiderSellBuyRatio,
        &[
            T::new(C::gt(30.0), 8),
            T::new(C::gt(20.0), 5),
            T::new(C::gt(12.0), 2),
        ],
        0,
    ),
    entry(
        Indicator::YieldCurve10y2y,
        &[T::new(C::lt(-0.5), 8), T::new(C::lt(0.0), 5)],
        0,
    ),
];

const VALUATION: &[PillarEntry] = &[
    entry(
        Indicator::ForwardPe,
        &[
            T::new(C::gt(30.0), 18),
            T::new(C::gt(25.0), 14),
            T::new(C::gt(22.0), 10),
            T::new(C::gt(18.0), 6),
        ],
        2,
    ),
    entry(
        Indicator::MarketCapToGdp,
        &[
            T::new(C::gt(200.0), 16),
            T::new(C::gt(180.0), 13),
            T::new(C::gt(150.0), 9),
            T::new(C::gt(120.0), 5),
        ],
        0,
    ),
    entry(
        Indicator::ShillerCape,
        &[
            T::new(C::gt(38.0), 16),
            T::new(C::gt(32.0), 12),
            T::new(C::gt(28.0), 8),
            T::new(C::gt(24.0), 4),
        ],
        0,
    ),
    entry(
        Indicator::PriceToSales,
        &[
            T::new(C::gt(3.0), 12),
            T::new(C::gt(2.5), 9),
            T::new(C::gt(2.0), 5),
        ],
        0,
    ),
    entry(
        Indicator::EquityRiskPremium,
        &[
            T::new(C::lt(0.0), 14),
            T::new(C::lt(1.0), 10),
            T::new(C::lt(2.0), 6),
            T::new(C::lt(3.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::Top10Concentration,
        &[
            T::new(C::gt(35.0), 14),
            T::new(C::gt(30.0), 10),
            T::new(C::gt(25.0), 6),
        ],
        0,
    ),
    entry(
        Indicator::DividendYield,
        &[
            T::new(C::lt(1.2), 10),
            T::new(C::lt(1.5), 6),
            T::new(C::lt(1.8), 3),
        ],
        0,
    ),
    entry(
        Indicator::TobinQ,
        &[
            T::new(C::gt(1.8), 10),
            T::new(C::gt(1.5), 6),
            T::new(C::gt(1.2), 3),
        ],
        0,
    ),
];

const MACRO: &[PillarEntry] = &[
    entry(
        Indicator::ManufacturingPmi,
        &[
            T::new(C::lt(42.0), 18),
            T::new(C::lt(46.0), 14),
            T::new(C::lt(50.0), 10),
            T::new(C::lt(52.0), 4),
        ],
        0,
    ),
    entry(
        Indicator::FedFundsRate,
        &[
            T::new(C::gt(6.0), 17),
            T::new(C::gt(5.5), 14),
            T::new(C::gt(5.0), 10),
            T::new(C::gt(4.5), 7),
            T::new(C::gt(4.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::SahmRule,
        &[
            T::new(C::ge(0.5), 16),
            T::new(C::ge(0.3), 10),
            T::new(C::ge(0.2), 5),
        ],
        0,
    ),
    entry(
        Indicator::CpiYoy,
        &[
            T::new(C::gt(6.0), 14),
            T::new(C::gt(4.5), 10),
            T::new(C::gt(3.5), 6),
            T::new(C::gt(3.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::TenYearYield,
        &[
            T::new(C::gt(5.5), 12),
            T::new(C::gt(5.0), 9),
            T::new(C::gt(4.5), 5),
        ],
        0,
    ),
    entry(
        Indicator::JoblessClaims,
        &[
            T::new(C::gt(350.0), 12),
            T::new(C::gt(300.0), 8),
            T::new(C::gt(260.0), 4),
        ],
        0,
    ),
    entry(
        Indicator::EmergencyFedAction,
        &[T::new(C::is_set(), 8)],
        0,
    ),
    entry(
        Indicator::ConsumerSentiment,
        &[
            T::new(C::lt(55.0), 10),
            T::new(C::lt(65.0), 6),
            T::new(C::lt(75.0), 3),
        ],
        0,
    ),
    entry(
        Indicator::LeadingIndex6m,
        &[
            T::new(C::lt(-4.0), 10),
            T::new(C::lt(-2.0), 6),
            T::new(C::lt(0.0), 3),
        ],
        0,
    ),
];

/// Staircase table for `pillar`, before any attribution policy is applied.
pub fn pillar_entries(pillar: Pillar) -> &'static [PillarEntry] {
    match pillar {
        Pillar::Momentum => MOMENTUM,
        Pillar::RiskAppetite => RISK_APPETITE,
        Pillar::Valuation => VALUATION,
        Pillar::Macro => MACRO,
    }
}

/// Staircase for `indicator` within `pillar`, if it is scored there.
pub fn pillar_entry(pillar: Pillar, indicator: Indicator) -> Option<&'static PillarEntry> {
    pillar_entries(pillar)
        .iter()
        .find(|e| e.indicator == indicator)
}

/// Points one indicator added to a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub indicator: Indicator,
    pub points: u32,
}

/// Scored pillar.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarScore {
    pub pillar: Pillar,
    /// Clamped score in `[0, 100]`.
    pub value: u32,
    /// Share of the composite in `(0, 1]`.
    pub weight: f64,
    /// Sum of contributions before the clamp.
    pub raw_total: u32,
    pub contributions: Vec<Contribution>,
}

/// Map the snapshot to this pillar's contributions, in table order.
pub fn pillar_contributions(
    pillar: Pillar,
    snapshot: &IndicatorSnapshot,
    policy: YieldCurvePolicy,
) -> Vec<Contribution> {
    pillar_entries(pillar)
        .iter()
        .filter(|e| policy.includes(pillar, e.indicator))
        .map(|e| Contribution {
            indicator: e.indicator,
            points: e.ladder.points(snapshot.value(e.indicator)),
        })
        .collect()
}

/// Score one pillar. Pure and total over a resolved snapshot.
pub fn score_pillar(
    pillar: Pillar,
    weight: f64,
    snapshot: &IndicatorSnapshot,
    policy: YieldCurvePolicy,
) -> PillarScore {
    let contributions = pillar_contributions(pillar, snapshot, policy);
    let raw_total: u32 = contributions.iter().map(|c| c.points).sum();
    PillarScore {
        pillar,
        value: raw_total.min(PILLAR_MAX),
        weight,
        raw_total,
        contributions,
    }
}
