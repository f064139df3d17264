//! JSON output contract for a [`CompositeResult`].
//!
//! Field names are camelCase and stable; downstream caches and exporters
//! store this shape verbatim. `confidence` and `certainty` carry the same
//! value under both names.

use ccpi_core::CompositeResult;
use ccpi_core::indicators::format_fingerprint;
use ccpi_core::scoring::Pillar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmplifierJson {
    pub reason: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeJson {
    pub level: u8,
    pub name: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarsJson {
    pub momentum: u32,
    pub risk_appetite: u32,
    pub valuation: u32,
    #[serde(rename = "macro")]
    pub macro_: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanaryJson {
    pub signal: String,
    pub pillar: String,
    pub severity: String,
    pub indicator_weight: u32,
    pub pillar_weight: f64,
    pub impact_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResultJson {
    pub ccpi: u32,
    #[serde(rename = "baseCCPI")]
    pub base_ccpi: u32,
    pub crash_amplifiers: Vec<AmplifierJson>,
    pub total_bonus: u32,
    pub confidence: u32,
    pub certainty: u32,
    pub regime: RegimeJson,
    pub pillars: PillarsJson,
    pub canaries: Vec<CanaryJson>,
    pub active_canaries: usize,
    pub total_indicators: usize,
    pub snapshot_hash: String,
    /// Keys of indicators that were filled from defaults.
    pub substitutions: Vec<String>,
}

fn pillar_value(result: &CompositeResult, pillar: Pillar) -> u32 {
    result
        .pillars
        .iter()
        .find(|p| p.pillar == pillar)
        .map_or(0, |p| p.value)
}

/// Project a result onto the output contract.
pub fn render_result(result: &CompositeResult) -> CompositeResultJson {
    CompositeResultJson {
        ccpi: result.final_index,
        base_ccpi: result.base_index,
        crash_amplifiers: result
            .amplifiers
            .iter()
            .map(|a| AmplifierJson {
                reason: a.reason.clone(),
                points: a.points,
            })
            .collect(),
        total_bonus: result.total_bonus,
        confidence: result.certainty,
        certainty: result.certainty,
        regime: RegimeJson {
            level: result.regime.level,
            name: result.regime.name.to_string(),
            color: result.regime.color.to_string(),
            description: result.regime.description.to_string(),
        },
        pillars: PillarsJson {
            momentum: pillar_value(result, Pillar::Momentum),
            risk_appetite: pillar_value(result, Pillar::RiskAppetite),
            valuation: pillar_value(result, Pillar::Valuation),
            macro_: pillar_value(result, Pillar::Macro),
        },
        canaries: result
            .canaries
            .iter()
            .map(|c| CanaryJson {
                signal: c.signal.clone(),
                pillar: c.pillar.name().to_string(),
                severity: c.severity.as_str().to_string(),
                indicator_weight: c.indicator_weight,
                pillar_weight: c.pillar_weight,
                impact_score: c.impact_score,
            })
            .collect(),
        active_canaries: result.active_canaries,
        total_indicators: result.total_indicators,
        snapshot_hash: format_fingerprint(result.snapshot_hash),
        substitutions: result.substituted.iter().map(|k| k.to_string()).collect(),
    }
}

/// Serialize a result to its JSON contract.
pub fn render_result_json(result: &CompositeResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(&render_result(result))
}
