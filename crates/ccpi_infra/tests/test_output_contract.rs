//! Output contract tests.
//!
//! - Field names and nesting of the rendered JSON.
//! - `confidence` mirrors `certainty`.
//! - Re-evaluating the same snapshot renders byte-identical JSON.

use ccpi_core::EngineSettings;
use ccpi_infra::output::{CompositeResultJson, render_result, render_result_json};
use ccpi_infra::evaluate_snapshot_json;
use serde_json::Value;

const SCENARIO_A: &str = r#"{
    "spx_return_1d": -6.5,
    "vix": 40,
    "put_call_ratio": 1.4,
    "yield_curve_10y2y": -0.3
}"#;

fn scenario_a_json() -> Value {
    let result = evaluate_snapshot_json(SCENARIO_A, &EngineSettings::default()).unwrap();
    serde_json::from_str(&render_result_json(&result).unwrap()).unwrap()
}

#[test]
fn test_top_level_fields() {
    let json = scenario_a_json();
    let object = json.as_object().unwrap();
    for key in [
        "ccpi",
        "baseCCPI",
        "crashAmplifiers",
        "totalBonus",
        "confidence",
        "certainty",
        "regime",
        "pillars",
        "canaries",
        "activeCanaries",
        "totalIndicators",
        "snapshotHash",
        "substitutions",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(object.len(), 13);
}

#[test]
fn test_scenario_a_values() {
    let json = scenario_a_json();
    assert_eq!(json["ccpi"], 87);
    assert_eq!(json["baseCCPI"], 12);
    assert_eq!(json["totalBonus"], 75);
    assert_eq!(json["certainty"], 62);
    assert_eq!(json["confidence"], json["certainty"]);
    assert_eq!(json["totalIndicators"], 38);
    assert_eq!(json["activeCanaries"], 5);
    assert_eq!(json["crashAmplifiers"].as_array().unwrap().len(), 4);

    assert_eq!(json["pillars"]["momentum"], 21);
    assert_eq!(json["pillars"]["riskAppetite"], 13);
    assert_eq!(json["pillars"]["valuation"], 2);
    assert_eq!(json["pillars"]["macro"], 0);

    assert_eq!(json["regime"]["level"], 5);
    assert_eq!(json["regime"]["name"], "Crash Watch");
    assert_eq!(json["regime"]["color"], "red");

    assert_eq!(json["snapshotHash"].as_str().unwrap().len(), 16);
}

#[test]
fn test_canary_shape_and_order() {
    let json = scenario_a_json();
    let canaries = json["canaries"].as_array().unwrap();
    assert_eq!(canaries.len(), 5);

    let top = &canaries[0];
    assert_eq!(top["severity"], "high");
    assert_eq!(top["pillar"], "Risk Appetite & Volatility");
    assert_eq!(top["pillarWeight"], 30.0);
    assert!((top["impactScore"].as_f64().unwrap() - 5.4).abs() < 1e-9);
    assert!(top["signal"].as_str().unwrap().contains("(1.40)"));

    let severities: Vec<&str> = canaries
        .iter()
        .map(|c| c["severity"].as_str().unwrap())
        .collect();
    assert_eq!(severities, vec!["high", "high", "high", "medium", "medium"]);
}

#[test]
fn test_rendering_is_deterministic() {
    let settings = EngineSettings::default();
    let first = evaluate_snapshot_json(SCENARIO_A, &settings).unwrap();
    let second = evaluate_snapshot_json(SCENARIO_A, &settings).unwrap();
    assert_eq!(
        render_result_json(&first).unwrap(),
        render_result_json(&second).unwrap()
    );
}

#[test]
fn test_rendered_json_reads_back() {
    let result = evaluate_snapshot_json(SCENARIO_A, &EngineSettings::default()).unwrap();
    let text = render_result_json(&result).unwrap();
    let parsed: CompositeResultJson = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, render_result(&result));
}

#[test]
fn test_baseline_reports_substitutions() {
    let result = evaluate_snapshot_json("{}", &EngineSettings::default()).unwrap();
    let rendered = render_result(&result);
    assert_eq!(rendered.substitutions.len(), 38);
    assert_eq!(rendered.substitutions[0], "spx_return_1d");
    assert!(rendered.canaries.is_empty());
    assert_eq!(rendered.regime.name, "Low Risk");
}
