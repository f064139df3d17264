//! Indicator vocabulary and documented default values.
//!
//! Every indicator the engine understands is a variant of [`Indicator`].
//! When a live reading is unavailable the snapshot is filled from the
//! default table below. Defaults are historical baselines that sit on the
//! zero-point path of every staircase; none of them is an implicit zero.

/// Number of indicators in the catalog.
pub const TOTAL_INDICATORS: usize = 38;

/// All tracked market indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    // Momentum & Technical
    SpxReturn1d,
    Vix,
    Spx200dmaBreach,
    Spx50dmaBreach,
    NdxReturn1d,
    Ndx200dmaBreach,
    Ndx50dmaBreach,
    Rsi14,
    AtrPct,
    BreadthAbove200dma,
    VixTermRatio,
    YieldCurve10y2y,
    SpxDrawdown,

    // Risk Appetite & Volatility
    PutCallRatio,
    RetailBullishPct,
    FearGreed,
    MarginDebtYoy,
    HighYieldSpread,
    SkewIndex,
    ShortInterestPct,
    InsiderSellBuyRatio,

    // Valuation & Market Structure
    ForwardPe,
    MarketCapToGdp,
    ShillerCape,
    PriceToSales,
    EquityRiskPremium,
    Top10Concentration,
    DividendYield,
    TobinQ,

    // Macro
    ManufacturingPmi,
    FedFundsRate,
    SahmRule,
    CpiYoy,
    TenYearYield,
    JoblessClaims,
    EmergencyFedAction,
    ConsumerSentiment,
    LeadingIndex6m,
}

/// How an indicator's reading is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Number,
    Flag,
}

/// All catalog entries, in canonical order.
pub const ALL_INDICATORS: &[Indicator] = &[
    Indicator::SpxReturn1d,
    Indicator::Vix,
    Indicator::Spx200dmaBreach,
    Indicator::Spx50dmaBreach,
    Indicator::NdxReturn1d,
    Indicator::Ndx200dmaBreach,
    Indicator::Ndx50dmaBreach,
    Indicator::Rsi14,
    Indicator::AtrPct,
    Indicator::BreadthAbove200dma,
    Indicator::VixTermRatio,
    Indicator::YieldCurve10y2y,
    Indicator::SpxDrawdown,
    Indicator::PutCallRatio,
    Indicator::RetailBullishPct,
    Indicator::FearGreed,
    Indicator::MarginDebtYoy,
    Indicator::HighYieldSpread,
    Indicator::SkewIndex,
    Indicator::ShortInterestPct,
    Indicator::InsiderSellBuyRatio,
    Indicator::ForwardPe,
    Indicator::MarketCapToGdp,
    Indicator::ShillerCape,
    Indicator::PriceToSales,
    Indicator::EquityRiskPremium,
    Indicator::Top10Concentration,
    Indicator::DividendYield,
    Indicator::TobinQ,
    Indicator::ManufacturingPmi,
    Indicator::FedFundsRate,
    Indicator::SahmRule,
    Indicator::CpiYoy,
    Indicator::TenYearYield,
    Indicator::JoblessClaims,
    Indicator::EmergencyFedAction,
    Indicator::ConsumerSentiment,
    Indicator::LeadingIndex6m,
];

impl Indicator {
    /// Stable snake_case key used by snapshot feeds and configuration.
    pub fn key(self) -> &'static str {
        match self {
            Indicator::SpxReturn1d => "spx_return_1d",
            Indicator::Vix => "vix",
            Indicator::Spx200dmaBreach => "spx_200dma_breach",
            Indicator::Spx50dmaBreach => "spx_50dma_breach",
            Indicator::NdxReturn1d => "ndx_return_1d",
            Indicator::Ndx200dmaBreach => "ndx_200dma_breach",
            Indicator::Ndx50dmaBreach => "ndx_50dma_breach",
            Indicator::Rsi14 => "rsi_14",
            Indicator::AtrPct => "atr_pct",
            Indicator::BreadthAbove200dma => "breadth_above_200dma",
            Indicator::VixTermRatio => "vix_term_ratio",
            Indicator::YieldCurve10y2y => "yield_curve_10y2y",
            Indicator::SpxDrawdown => "spx_drawdown",
            Indicator::PutCallRatio => "put_call_ratio",
            Indicator::RetailBullishPct => "retail_bullish_pct",
            Indicator::FearGreed => "fear_greed",
            Indicator::MarginDebtYoy => "margin_debt_yoy",
            Indicator::HighYieldSpread => "high_yield_spread",
            Indicator::SkewIndex => "skew_index",
            Indicator::ShortInterestPct => "short_interest_pct",
            Indicator::InsiderSellBuyRatio => "insider_sell_buy_ratio",
            Indicator::ForwardPe => "forward_pe",
            Indicator::MarketCapToGdp => "market_cap_to_gdp",
            Indicator::ShillerCape => "shiller_cape",
            Indicator::PriceToSales => "price_to_sales",
            Indicator::EquityRiskPremium => "equity_risk_premium",
            Indicator::Top10Concentration => "top10_concentration",
            Indicator::DividendYield => "dividend_yield",
            Indicator::TobinQ => "tobin_q",
            Indicator::ManufacturingPmi => "manufacturing_pmi",
            Indicator::FedFundsRate => "fed_funds_rate",
            Indicator::SahmRule => "sahm_rule",
            Indicator::CpiYoy => "cpi_yoy",
            Indicator::TenYearYield => "ten_year_yield",
            Indicator::JoblessClaims => "jobless_claims",
            Indicator::EmergencyFedAction => "emergency_fed_action",
            Indicator::ConsumerSentiment => "consumer_sentiment",
            Indicator::LeadingIndex6m => "leading_index_6m",
        }
    }

    /// Human-readable label used in canary and amplifier text.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::SpxReturn1d => "S&P 500 1-day return",
            Indicator::Vix => "VIX",
            Indicator::Spx200dmaBreach => "S&P 500 vs 200-day MA",
            Indicator::Spx50dmaBreach => "S&P 500 vs 50-day MA",
            Indicator::NdxReturn1d => "Nasdaq-100 1-day return",
            Indicator::Ndx200dmaBreach => "Nasdaq-100 vs 200-day MA",
            Indicator::Ndx50dmaBreach => "Nasdaq-100 vs 50-day MA",
            Indicator::Rsi14 => "S&P 500 RSI(14)",
            Indicator::AtrPct => "S&P 500 ATR %",
            Indicator::BreadthAbove200dma => "Breadth above 200-day MA",
            Indicator::VixTermRatio => "VIX term structure",
            Indicator::YieldCurve10y2y => "10Y-2Y yield curve",
            Indicator::SpxDrawdown => "S&P 500 drawdown",
            Indicator::PutCallRatio => "Put/Call ratio",
            Indicator::RetailBullishPct => "Retail bullish sentiment",
            Indicator::FearGreed => "Fear & Greed index",
            Indicator::MarginDebtYoy => "Margin debt YoY",
            Indicator::HighYieldSpread => "High-yield spread",
            Indicator::SkewIndex => "SKEW index",
            Indicator::ShortInterestPct => "Short interest",
            Indicator::InsiderSellBuyRatio => "Insider sell/buy ratio",
            Indicator::ForwardPe => "Forward P/E",
            Indicator::MarketCapToGdp => "Market cap / GDP",
            Indicator::ShillerCape => "Shiller CAPE",
            Indicator::PriceToSales => "Price / Sales",
            Indicator::EquityRiskPremium => "Equity risk premium",
            Indicator::Top10Concentration => "Top-10 concentration",
            Indicator::DividendYield => "Dividend yield",
            Indicator::TobinQ => "Tobin's Q",
            Indicator::ManufacturingPmi => "Manufacturing PMI",
            Indicator::FedFundsRate => "Fed funds rate",
            Indicator::SahmRule => "Sahm rule",
            Indicator::CpiYoy => "CPI YoY",
            Indicator::TenYearYield => "10Y Treasury yield",
            Indicator::JoblessClaims => "Initial jobless claims",
            Indicator::EmergencyFedAction => "Emergency Fed action",
            Indicator::ConsumerSentiment => "Consumer sentiment",
            Indicator::LeadingIndex6m => "Leading index 6m change",
        }
    }

    pub fn kind(self) -> IndicatorKind {
        match self {
            Indicator::EmergencyFedAction => IndicatorKind::Flag,
            _ => IndicatorKind::Number,
        }
    }

    /// Documented baseline used when the reading is missing or malformed.
    ///
    /// Flags are stored as `1.0` (set) / `0.0` (clear).
    pub fn documented_default(self) -> f64 {
        match self {
            Indicator::SpxReturn1d => 0.05,
            Indicator::Vix => 15.0,
            Indicator::Spx200dmaBreach => 5.0,
            Indicator::Spx50dmaBreach => 5.0,
            Indicator::NdxReturn1d => 0.05,
            Indicator::Ndx200dmaBreach => 5.0,
            Indicator::Ndx50dmaBreach => 5.0,
            Indicator::Rsi14 => 50.0,
            Indicator::AtrPct => 1.0,
            Indicator::BreadthAbove200dma => 60.0,
            Indicator::VixTermRatio => 0.88,
            Indicator::YieldCurve10y2y => 0.60,
            Indicator::SpxDrawdown => 2.0,
            Indicator::PutCallRatio => 1.0,
            Indicator::RetailBullishPct => 38.0,
            Indicator::FearGreed => 50.0,
            Indicator::MarginDebtYoy => 5.0,
            Indicator::HighYieldSpread => 3.5,
            Indicator::SkewIndex => 120.0,
            Indicator::ShortInterestPct => 2.5,
            Indicator::InsiderSellBuyRatio => 8.0,
            Indicator::ForwardPe => 16.0,
            Indicator::MarketCapToGdp => 110.0,
            Indicator::ShillerCape => 22.0,
            Indicator::PriceToSales => 1.8,
            Indicator::EquityRiskPremium => 3.5,
            Indicator::Top10Concentration => 22.0,
            Indicator::DividendYield => 2.0,
            Indicator::TobinQ => 1.0,
            Indicator::ManufacturingPmi => 54.0,
            Indicator::FedFundsRate => 2.5,
            Indicator::SahmRule => 0.1,
            Indicator::CpiYoy => 2.3,
            Indicator::TenYearYield => 3.8,
            Indicator::JoblessClaims => 220.0,
            Indicator::EmergencyFedAction => 0.0,
            Indicator::ConsumerSentiment => 85.0,
            Indicator::LeadingIndex6m => 1.0,
        }
    }

    /// Position in [`ALL_INDICATORS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up an indicator by its snapshot key.
    pub fn from_key(key: &str) -> Option<Indicator> {
        ALL_INDICATORS.iter().copied().find(|i| i.key() == key)
    }
}

/// Explicit default table consulted once, at snapshot normalization.
///
/// Starts from [`Indicator::documented_default`]; deployments may override
/// individual entries through configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTable {
    values: [f64; TOTAL_INDICATORS],
}

impl DefaultTable {
    pub fn documented() -> Self {
        let mut values = [0.0; TOTAL_INDICATORS];
        for &indicator in ALL_INDICATORS {
            values[indicator.index()] = indicator.documented_default();
        }
        Self { values }
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        self.values[indicator.index()]
    }

    /// Replace the default for one indicator. Validation happens in
    /// [`crate::pipeline::EngineSettings::validate`].
    pub fn set(&mut self, indicator: Indicator, value: f64) {
        self.values[indicator.index()] = value;
    }
}

impl Default for DefaultTable {
    fn default() -> Self {
        Self::documented()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete_and_ordered() {
        assert_eq!(ALL_INDICATORS.len(), TOTAL_INDICATORS);
        for (pos, &indicator) in ALL_INDICATORS.iter().enumerate() {
            assert_eq!(indicator.index(), pos, "{indicator:?} out of order");
        }
    }

    #[test]
    fn keys_are_unique_and_resolve() {
        let mut keys: Vec<&str> = ALL_INDICATORS.iter().map(|i| i.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), TOTAL_INDICATORS);
        for &indicator in ALL_INDICATORS {
            assert_eq!(Indicator::from_key(indicator.key()), Some(indicator));
        }
        assert_eq!(Indicator::from_key("not_an_indicator"), None);
    }

    #[test]
    fn numeric_defaults_are_not_implicit_zero() {
        for &indicator in ALL_INDICATORS {
            let value = indicator.documented_default();
            assert!(value.is_finite());
            if indicator.kind() == IndicatorKind::Number {
                assert!(value != 0.0, "{} defaults to zero", indicator.key());
            }
        }
    }
}
