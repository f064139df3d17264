//! Canary signals.
//!
//! Every tracked indicator is checked against a two-tier ladder: `high`
//! (stricter) first, then `medium` (looser). At most one canary is emitted
//! per signal; a matching high tier suppresses the medium check.
//!
//! Ordering: severity descending, then impact score descending. The sort
//! is stable, so equal impacts keep generation (table) order.

use std::cmp::Ordering;

use crate::indicators::{Indicator, IndicatorKind, IndicatorSnapshot};
use crate::scoring::{Condition as C, Pillar, PillarWeights, YieldCurvePolicy, pillar_entry};

/// Canary severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Larger is more severe.
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// High and medium canaries count as active warnings.
    pub fn is_active(self) -> bool {
        matches!(self, Severity::High | Severity::Medium)
    }
}

/// An indicator that crossed a warning threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Canary {
    pub signal: String,
    pub indicator: Indicator,
    pub pillar: Pillar,
    pub severity: Severity,
    /// Staircase weight of the indicator within `pillar`.
    pub indicator_weight: u32,
    /// Pillar share of the composite, in percent.
    pub pillar_weight: f64,
    /// `indicator_weight × pillar_weight / 100`.
    pub impact_score: f64,
}

/// Two-tier canary definition for one (indicator, pillar) signal.
#[derive(Debug, Clone, Copy)]
pub struct CanaryRule {
    pub indicator: Indicator,
    pub pillar: Pillar,
    pub high: &'static [C],
    pub medium: &'static [C],
    pub high_note: &'static str,
    pub medium_note: &'static str,
}

const fn rule(
    indicator: Indicator,
    pillar: Pillar,
    high: &'static [C],
    medium: &'static [C],
    high_note: &'static str,
    medium_note: &'static str,
) -> CanaryRule {
    CanaryRule {
        indicator,
        pillar,
        high,
        medium,
        high_note,
        medium_note,
    }
}

use Indicator as I;
use Pillar::{Macro, Momentum, RiskAppetite, Valuation};

#[rustfmt::skip]
const CANARY_RULES: &[CanaryRule] = &[
    // Momentum & Technical
    rule(I::SpxReturn1d, Momentum, &[C::le(-3.0)], &[C::le(-1.5)], "sharp daily selloff", "daily selloff"),
    rule(I::Vix, Momentum, &[C::gt(30.0)], &[C::gt(22.0)], "volatility spike", "volatility elevated"),
    rule(I::Spx200dmaBreach, Momentum, &[C::ge(100.0)], &[C::ge(50.0)], "below 200-day MA", "approaching 200-day MA"),
    rule(I::Spx50dmaBreach, Momentum, &[C::ge(100.0)], &[C::ge(50.0)], "below 50-day MA", "approaching 50-day MA"),
    rule(I::NdxReturn1d, Momentum, &[C::le(-4.0)], &[C::le(-2.0)], "sharp tech selloff", "tech selloff"),
    rule(I::Ndx200dmaBreach, Momentum, &[C::ge(100.0)], &[C::ge(50.0)], "below 200-day MA", "approaching 200-day MA"),
    rule(I::Ndx50dmaBreach, Momentum, &[C::ge(100.0)], &[C::ge(50.0)], "below 50-day MA", "approaching 50-day MA"),
    rule(I::Rsi14, Momentum, &[C::gt(80.0)], &[C::gt(70.0)], "extremely overbought", "overbought"),
    rule(I::AtrPct, Momentum, &[C::gt(4.0)], &[C::gt(3.0)], "extreme daily ranges", "wide daily ranges"),
    rule(I::BreadthAbove200dma, Momentum, &[C::lt(30.0)], &[C::lt(40.0)], "breadth collapse", "narrowing breadth"),
    rule(I::VixTermRatio, Momentum, &[C::gt(1.05)], &[C::gt(1.0)], "deep backwardation", "term structure inverted"),
    rule(I::YieldCurve10y2y, Momentum, &[C::lt(-0.5)], &[C::lt(0.0)], "deeply inverted", "inverted"),
    rule(I::SpxDrawdown, Momentum, &[C::ge(10.0)], &[C::ge(5.0)], "correction territory", "pullback underway"),
    // Risk Appetite & Volatility
    rule(I::PutCallRatio, RiskAppetite, &[C::lt(0.6), C::gt(1.3)], &[C::lt(0.7), C::gt(1.2)], "extreme positioning", "one-sided positioning"),
    rule(I::RetailBullishPct, RiskAppetite, &[C::gt(55.0)], &[C::gt(50.0), C::lt(25.0)], "retail euphoria", "sentiment extreme"),
    rule(I::FearGreed, RiskAppetite, &[C::gt(80.0), C::lt(15.0)], &[C::gt(70.0), C::lt(25.0)], "extreme reading", "stretched reading"),
    rule(I::MarginDebtYoy, RiskAppetite, &[C::gt(40.0)], &[C::gt(25.0)], "leverage surge", "leverage building"),
    rule(I::HighYieldSpread, RiskAppetite, &[C::gt(6.0)], &[C::gt(5.0)], "credit stress", "credit widening"),
    rule(I::SkewIndex, RiskAppetite, &[C::gt(150.0)], &[C::gt(140.0)], "heavy tail hedging", "tail hedging"),
    rule(I::ShortInterestPct, RiskAppetite, &[C::lt(1.5)], &[C::lt(2.0)], "no short cushion", "thin short cushion"),
    rule(I::InsiderSellBuyRatio, RiskAppetite, &[C::gt(30.0)], &[C::gt(20.0)], "heavy insider selling", "insider selling"),
    rule(I::YieldCurve10y2y, RiskAppetite, &[C::lt(-0.5)], &[C::lt(0.0)], "deeply inverted", "inverted"),
    // Valuation & Market Structure
    rule(I::ForwardPe, Valuation, &[C::gt(30.0)], &[C::gt(25.0)], "extreme multiple", "stretched multiple"),
    rule(I::MarketCapToGdp, Valuation, &[C::gt(200.0)], &[C::gt(180.0)], "extreme valuation", "stretched valuation"),
    rule(I::ShillerCape, Valuation, &[C::gt(38.0)], &[C::gt(32.0)], "extreme valuation", "stretched valuation"),
    rule(I::PriceToSales, Valuation, &[C::gt(3.0)], &[C::gt(2.5)], "extreme multiple", "stretched multiple"),
    rule(I::EquityRiskPremium, Valuation, &[C::lt(0.0)], &[C::lt(1.0)], "negative premium", "thin premium"),
    rule(I::Top10Concentration, Valuation, &[C::gt(35.0)], &[C::gt(30.0)], "extreme concentration", "high concentration"),
    rule(I::DividendYield, Valuation, &[C::lt(1.2)], &[C::lt(1.5)], "record-low yield", "low yield"),
    rule(I::TobinQ, Valuation, &[C::gt(1.8)], &[C::gt(1.5)], "extreme replacement premium", "elevated replacement premium"),
    // Macro
    rule(I::ManufacturingPmi, Macro, &[C::lt(46.0)], &[C::lt(50.0)], "deep contraction", "contraction"),
    rule(I::FedFundsRate, Macro, &[C::gt(5.5)], &[C::gt(5.0)], "very restrictive policy", "restrictive policy"),
    rule(I::SahmRule, Macro, &[C::ge(0.5)], &[C::ge(0.3)], "recession trigger", "labor market softening"),
    rule(I::CpiYoy, Macro, &[C::gt(6.0)], &[C::gt(4.5)], "inflation shock", "hot inflation"),
    rule(I::TenYearYield, Macro, &[C::gt(5.0)], &[C::gt(4.5)], "yield shock", "yields elevated"),
    rule(I::JoblessClaims, Macro, &[C::gt(350.0)], &[C::gt(300.0)], "layoff wave", "claims rising"),
    rule(I::EmergencyFedAction, Macro, &[C::is_set()], &[], "emergency action taken", ""),
    rule(I::ConsumerSentiment, Macro, &[C::lt(55.0)], &[C::lt(65.0)], "consumer collapse", "consumer weakness"),
    rule(I::LeadingIndex6m, Macro, &[C::lt(-4.0)], &[C::lt(-2.0)], "recession signal", "slowdown signal"),
];

/// All canary rules in generation order.
pub fn canary_rules() -> &'static [CanaryRule] {
    CANARY_RULES
}

fn any_match(conditions: &[C], value: f64) -> bool {
    conditions.iter().any(|c| c.matches(value))
}

fn format_reading(indicator: Indicator, value: f64) -> String {
    match indicator.kind() {
        IndicatorKind::Flag => String::new(),
        IndicatorKind::Number => format!(" ({value:.2})"),
    }
}

/// Evaluate one rule; `None` when neither tier matches.
pub fn evaluate_rule(
    rule: &CanaryRule,
    snapshot: &IndicatorSnapshot,
    weights: &PillarWeights,
) -> Option<Canary> {
    let value = snapshot.value(rule.indicator);
    let (severity, note) = if any_match(rule.high, value) {
        (Severity::High, rule.high_note)
    } else if any_match(rule.medium, value) {
        (Severity::Medium, rule.medium_note)
    } else {
        return None;
    };

    let indicator_weight = pillar_entry(rule.pillar, rule.indicator)
        .map_or(0, |e| e.ladder.max_points());
    let pillar_weight = weights.percent(rule.pillar);

    Some(Canary {
        signal: format!(
            "{}: {}{}",
            rule.indicator.label(),
            note,
            format_reading(rule.indicator, value)
        ),
        indicator: rule.indicator,
        pillar: rule.pillar,
        severity,
        indicator_weight,
        pillar_weight,
        impact_score: f64::from(indicator_weight) * pillar_weight / 100.0,
    })
}

/// Severity descending, then impact descending.
pub fn canary_order(a: &Canary, b: &Canary) -> Ordering {
    b.severity
        .rank()
        .cmp(&a.severity.rank())
        .then_with(|| b.impact_score.total_cmp(&a.impact_score))
}

/// Generate and sort canaries for a resolved snapshot.
pub fn generate_canaries(
    snapshot: &IndicatorSnapshot,
    weights: &PillarWeights,
    policy: YieldCurvePolicy,
) -> Vec<Canary> {
    let mut canaries: Vec<Canary> = CANARY_RULES
        .iter()
        .filter(|r| policy.includes(r.pillar, r.indicator))
        .filter_map(|r| evaluate_rule(r, snapshot, weights))
        .collect();
    canaries.sort_by(canary_order);
    canaries
}

/// Number of high or medium canaries.
pub fn active_canary_count(canaries: &[Canary]) -> usize {
    canaries.iter().filter(|c| c.severity.is_active()).count()
}
