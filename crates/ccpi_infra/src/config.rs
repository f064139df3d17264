//! Engine configuration loading.
//!
//! Every field of the configuration file is optional. Anything omitted
//! takes the built-in methodology value (pillar weights 0.35/0.30/0.15/0.20,
//! dual yield-curve attribution, documented indicator defaults). Anything
//! supplied but invalid fails closed: the engine must not start on a
//! configuration it cannot trust.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use ccpi_core::indicators::{Indicator, IndicatorKind};
use ccpi_core::scoring::{ALL_PILLARS, YieldCurvePolicy};
use ccpi_core::{ConfigurationError, EngineSettings};
use serde::Deserialize;

// ─── File format ────────────────────────────────────────────────────────

/// On-disk engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EngineConfigFile {
    #[serde(default)]
    pub weights: Option<WeightsConfig>,
    #[serde(default)]
    pub yield_curve_policy: Option<YieldCurvePolicyConfig>,
    /// Per-indicator default overrides keyed by snapshot key.
    #[serde(default)]
    pub indicator_defaults: BTreeMap<String, DefaultOverride>,
}

/// Pillar weight overrides. Omitted pillars keep their built-in weight.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeightsConfig {
    #[serde(default)]
    pub momentum: Option<f64>,
    #[serde(default)]
    pub risk_appetite: Option<f64>,
    #[serde(default)]
    pub valuation: Option<f64>,
    #[serde(default, rename = "macro")]
    pub macro_: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YieldCurvePolicyConfig {
    Dual,
    Momentum,
    RiskAppetite,
}

impl From<YieldCurvePolicyConfig> for YieldCurvePolicy {
    fn from(value: YieldCurvePolicyConfig) -> Self {
        match value {
            YieldCurvePolicyConfig::Dual => YieldCurvePolicy::DualSignal,
            YieldCurvePolicyConfig::Momentum => YieldCurvePolicy::MomentumOnly,
            YieldCurvePolicyConfig::RiskAppetite => YieldCurvePolicy::RiskAppetiteOnly,
        }
    }
}

/// Default override: a number for numeric indicators, a bool for flags.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultOverride {
    Number(f64),
    Flag(bool),
}

// ─── Errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration file could not be read.
    Io { reason: String },
    /// Configuration is not valid JSON or has unknown fields.
    Parse { reason: String },
    /// `indicatorDefaults` names an indicator outside the catalog.
    UnknownIndicator { key: String },
    /// Override kind does not match the indicator kind.
    DefaultKindMismatch { key: String },
    /// Resolved settings violate an engine invariant.
    Invalid(ConfigurationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { reason } => write!(f, "config read failed: {reason}"),
            Self::Parse { reason } => write!(f, "config parse failed: {reason}"),
            Self::UnknownIndicator { key } => {
                write!(f, "config names unknown indicator '{key}'")
            }
            Self::DefaultKindMismatch { key } => {
                write!(f, "config default for '{key}' has the wrong kind")
            }
            Self::Invalid(err) => write!(f, "config fail-closed: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigurationError> for ConfigError {
    fn from(err: ConfigurationError) -> Self {
        Self::Invalid(err)
    }
}

// ─── Resolution ─────────────────────────────────────────────────────────

impl EngineConfigFile {
    /// Overlay this file on the built-in settings and validate the result.
    pub fn into_settings(self) -> Result<EngineSettings, ConfigError> {
        let mut settings = EngineSettings::default();

        if let Some(weights) = self.weights {
            let overrides = [
                weights.momentum,
                weights.risk_appetite,
                weights.valuation,
                weights.macro_,
            ];
            for (pillar, weight) in ALL_PILLARS.into_iter().zip(overrides) {
                if let Some(weight) = weight {
                    settings.weights.set(pillar, weight);
                }
            }
        }

        if let Some(policy) = self.yield_curve_policy {
            settings.yield_curve = policy.into();
        }

        for (key, value) in self.indicator_defaults {
            let indicator = Indicator::from_key(&key)
                .ok_or_else(|| ConfigError::UnknownIndicator { key: key.clone() })?;
            let resolved = match (indicator.kind(), value) {
                (IndicatorKind::Number, DefaultOverride::Number(v)) => v,
                (IndicatorKind::Flag, DefaultOverride::Flag(b)) => {
                    if b {
                        1.0
                    } else {
                        0.0
                    }
                }
                _ => return Err(ConfigError::DefaultKindMismatch { key }),
            };
            settings.defaults.set(indicator, resolved);
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Parse and validate configuration from a JSON string.
pub fn parse_engine_config(text: &str) -> Result<EngineSettings, ConfigError> {
    let file: EngineConfigFile = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
        reason: e.to_string(),
    })?;
    file.into_settings().inspect_err(|err| {
        tracing::warn!(error = %err, "engine configuration rejected");
    })
}

/// Read, parse and validate configuration from a JSON file.
pub fn load_engine_config(path: &Path) -> Result<EngineSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        reason: format!("{}: {e}", path.display()),
    })?;
    let settings = parse_engine_config(&text)?;
    tracing::info!(path = %path.display(), "engine configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_builtin_settings() {
        let settings = parse_engine_config("{}").expect("empty config");
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn policy_names_map_to_core_policies() {
        for (name, policy) in [
            ("dual", YieldCurvePolicy::DualSignal),
            ("momentum", YieldCurvePolicy::MomentumOnly),
            ("riskAppetite", YieldCurvePolicy::RiskAppetiteOnly),
        ] {
            let text = format!(r#"{{"yieldCurvePolicy": "{name}"}}"#);
            let settings = parse_engine_config(&text).expect("policy config");
            assert_eq!(settings.yield_curve, policy);
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_engine_config(r#"{"weight": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
