//! JSON snapshot ingestion.
//!
//! The acquisition layer hands over one flat JSON object per evaluation,
//! keyed by indicator key. This module only maps JSON to [`RawSnapshot`];
//! substituting defaults is the core's job. A single bad reading never
//! fails the whole snapshot: it is recorded as `Missing` and logged.

use std::fmt;

use ccpi_core::indicators::{Indicator, RawSnapshot, RawValue};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Payload is not valid JSON.
    Parse { reason: String },
    /// Payload is valid JSON but not an object.
    NotAnObject,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { reason } => write!(f, "snapshot parse failed: {reason}"),
            Self::NotAnObject => write!(f, "snapshot must be a JSON object"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Map one JSON reading to a raw value.
pub fn raw_value_from_json(value: &Value) -> RawValue {
    match value {
        Value::Null => RawValue::Missing,
        Value::Bool(b) => RawValue::Flag(*b),
        Value::Number(n) => n.as_f64().map_or(RawValue::Missing, RawValue::Number),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_or(RawValue::Missing, RawValue::Number),
        Value::Array(_) | Value::Object(_) => RawValue::Missing,
    }
}

/// Build a raw snapshot from an already-parsed JSON value.
pub fn raw_snapshot_from_value(value: &Value) -> Result<RawSnapshot, SnapshotError> {
    let object = value.as_object().ok_or(SnapshotError::NotAnObject)?;
    let mut raw = RawSnapshot::new();

    for (key, reading) in object {
        let Some(indicator) = Indicator::from_key(key) else {
            tracing::warn!(key = %key, "ignoring unknown snapshot key");
            raw.unknown_keys.push(key.clone());
            continue;
        };
        let parsed = raw_value_from_json(reading);
        if parsed == RawValue::Missing && !reading.is_null() {
            tracing::warn!(
                indicator = indicator.key(),
                reading = %reading,
                "unreadable indicator value"
            );
        }
        raw.insert(indicator, parsed);
    }

    Ok(raw)
}

/// Parse a JSON snapshot payload.
pub fn parse_snapshot_json(text: &str) -> Result<RawSnapshot, SnapshotError> {
    let value: Value = serde_json::from_str(text).map_err(|e| SnapshotError::Parse {
        reason: e.to_string(),
    })?;
    raw_snapshot_from_value(&value)
}
