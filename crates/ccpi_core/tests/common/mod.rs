#![allow(dead_code)]

use ccpi_core::indicators::{DefaultTable, Indicator, IndicatorSnapshot, RawSnapshot};

/// Test helper: resolved snapshot with `readings` applied over the
/// documented defaults.
///
/// `snapshot_with(&[])` is the all-baseline snapshot.
pub fn snapshot_with(readings: &[(Indicator, f64)]) -> IndicatorSnapshot {
    let mut raw = RawSnapshot::new();
    for &(indicator, value) in readings {
        raw = raw.with(indicator, value);
    }
    IndicatorSnapshot::normalize(&raw, &DefaultTable::documented())
}

/// Scenario A readings: acute selloff with inverted curve.
pub fn scenario_a() -> IndicatorSnapshot {
    snapshot_with(&[
        (Indicator::SpxReturn1d, -6.5),
        (Indicator::Vix, 40.0),
        (Indicator::PutCallRatio, 1.4),
        (Indicator::YieldCurve10y2y, -0.3),
    ])
}

/// Every indicator pushed to its most severe tier.
pub fn worst_case() -> IndicatorSnapshot {
    let raw = RawSnapshot::new()
        .with(Indicator::SpxReturn1d, -12.0)
        .with(Indicator::Vix, 60.0)
        .with(Indicator::Spx200dmaBreach, 100.0)
        .with(Indicator::Spx50dmaBreach, 100.0)
        .with(Indicator::NdxReturn1d, -10.0)
        .with(Indicator::Ndx200dmaBreach, 100.0)
        .with(Indicator::Ndx50dmaBreach, 100.0)
        .with(Indicator::Rsi14, 85.0)
        .with(Indicator::AtrPct, 6.0)
        .with(Indicator::BreadthAbove200dma, 10.0)
        .with(Indicator::VixTermRatio, 1.25)
        .with(Indicator::YieldCurve10y2y, -1.0)
        .with(Indicator::SpxDrawdown, 30.0)
        .with(Indicator::PutCallRatio, 0.5)
        .with(Indicator::RetailBullishPct, 60.0)
        .with(Indicator::FearGreed, 90.0)
        .with(Indicator::MarginDebtYoy, 50.0)
        .with(Indicator::HighYieldSpread, 9.0)
        .with(Indicator::SkewIndex, 160.0)
        .with(Indicator::ShortInterestPct, 1.0)
        .with(Indicator::InsiderSellBuyRatio, 40.0)
        .with(Indicator::ForwardPe, 35.0)
        .with(Indicator::MarketCapToGdp, 220.0)
        .with(Indicator::ShillerCape, 40.0)
        .with(Indicator::PriceToSales, 3.5)
        .with(Indicator::EquityRiskPremium, -0.5)
        .with(Indicator::Top10Concentration, 40.0)
        .with(Indicator::DividendYield, 1.0)
        .with(Indicator::TobinQ, 2.0)
        .with(Indicator::ManufacturingPmi, 40.0)
        .with(Indicator::FedFundsRate, 6.5)
        .with(Indicator::SahmRule, 0.8)
        .with(Indicator::CpiYoy, 8.0)
        .with(Indicator::TenYearYield, 6.0)
        .with(Indicator::JoblessClaims, 400.0)
        .with_flag(Indicator::EmergencyFedAction, true)
        .with(Indicator::ConsumerSentiment, 50.0)
        .with(Indicator::LeadingIndex6m, -5.0);
    IndicatorSnapshot::normalize(&raw, &DefaultTable::documented())
}
