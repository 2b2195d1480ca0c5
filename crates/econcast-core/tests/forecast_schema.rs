//! Serde and JsonSchema checks for the forecast record.

use econcast_core::{ForecastRequest, ForecastResult};
use pretty_assertions::assert_eq;
use schemars::schema_for;

fn schema_errors(instance: &serde_json::Value) -> Vec<String> {
    let schema = serde_json::to_value(schema_for!(ForecastResult)).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn fallback_satisfies_generated_schema() {
    let fallback = ForecastResult::fallback(&ForecastRequest::new("France", "GDP Growth"));
    let instance = serde_json::to_value(&fallback).unwrap();
    let errors = schema_errors(&instance);
    assert!(errors.is_empty(), "unexpected schema errors: {errors:?}");
}

#[test]
fn schema_requires_all_six_fields() {
    let schema = serde_json::to_value(schema_for!(ForecastResult)).unwrap();
    let mut required: Vec<&str> = schema["required"]
        .as_array()
        .expect("required list")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    required.sort_unstable();

    assert_eq!(
        required,
        vec!["confidence", "country", "detail", "key_drivers", "title", "value"]
    );
    assert_eq!(schema["properties"]["key_drivers"]["type"], "array");
}

#[test]
fn confidence_schema_allows_integer_or_numeric_string() {
    let schema = serde_json::to_value(schema_for!(ForecastResult)).unwrap();
    let types: Vec<&str> = schema["properties"]["confidence"]["anyOf"]
        .as_array()
        .expect("anyOf list")
        .iter()
        .filter_map(|branch| branch["type"].as_str())
        .collect();
    assert_eq!(types, vec!["integer", "string"]);
}

#[test]
fn schema_accepts_quoted_integer_confidence() {
    let instance = serde_json::json!({
        "title": "Inflation Rate 2026",
        "country": "Ghana",
        "value": "18%",
        "confidence": "70",
        "detail": "d",
        "key_drivers": ["Cedi depreciation"]
    });
    let errors = schema_errors(&instance);
    assert!(errors.is_empty(), "unexpected schema errors: {errors:?}");
}

#[test]
fn schema_rejects_string_confidence() {
    let instance = serde_json::json!({
        "title": "Inflation Rate 2026",
        "country": "Ghana",
        "value": "18%",
        "confidence": "seventy",
        "detail": "d",
        "key_drivers": ["Cedi depreciation"]
    });
    assert!(!schema_errors(&instance).is_empty());
}

#[test]
fn pretty_json_uses_two_space_indent() {
    let fallback = ForecastResult::fallback(&ForecastRequest::new("France", "GDP Growth"));
    let rendered = serde_json::to_string_pretty(&fallback).unwrap();

    assert!(rendered.starts_with("{\n  \"title\": \"GDP Growth 2026\",\n  \"country\": \"France\","));
    assert!(rendered.contains("\n  \"key_drivers\": [\n    \"AI service unavailable\","));
}
