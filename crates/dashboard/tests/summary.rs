// File: crates/dashboard/tests/summary.rs
// Purpose: Validation of the `/api/total` payload and its chart dataset.

use crime_dashboard::{CrimeCountSummary, SchemaError};
use serde_json::json;

#[test]
fn summary_maps_to_single_series() {
    let s = CrimeCountSummary::from_json(&json!({"non_criminal_count": 120, "criminal_count": 45}))
        .expect("valid summary");
    assert_eq!(s, CrimeCountSummary::new(120, 45));
    assert_eq!(s.total(), 165);

    let data = s.to_chart_data();
    assert_eq!(data.labels, ["Non Criminal", "Criminal"]);
    assert_eq!(data.values(), vec![vec![120.0, 45.0]]);
}

#[test]
fn extra_fields_are_ignored() {
    let v = json!({"non_criminal_count": 1, "criminal_count": 2, "generated_at": "2016-02-01"});
    assert_eq!(CrimeCountSummary::try_from(&v), Ok(CrimeCountSummary::new(1, 2)));
}

#[test]
fn fractional_notation_is_not_a_count() {
    let v = json!({"non_criminal_count": 3.0, "criminal_count": 0});
    let err = CrimeCountSummary::from_json(&v).unwrap_err();
    assert!(matches!(err, SchemaError::Invalid(ref m) if m.contains("expected u64")), "{err}");
}

#[test]
fn missing_field_is_named() {
    let v = json!({"non_criminal_count": 3});
    let err = CrimeCountSummary::from_json(&v).unwrap_err();
    assert!(matches!(err, SchemaError::Invalid(ref m) if m.contains("missing field `criminal_count`")), "{err}");
}

#[test]
fn non_numeric_and_negative_counts_are_rejected() {
    for bad in [json!("12"), json!(-4), json!(1.5), json!(null)] {
        let v = json!({"non_criminal_count": bad, "criminal_count": 1});
        let err = CrimeCountSummary::from_json(&v).unwrap_err();
        assert!(matches!(err, SchemaError::Invalid(_)), "{bad} -> {err}");
    }
}

#[test]
fn count_past_u64_max_is_a_schema_error() {
    let body = r#"{"non_criminal_count": 18446744073709551616, "criminal_count": 1}"#;
    let v: serde_json::Value = serde_json::from_str(body).expect("valid JSON");
    let err = CrimeCountSummary::from_json(&v).unwrap_err();
    assert!(matches!(err, SchemaError::Invalid(ref m) if m.contains("expected u64")), "{err}");
}

#[test]
fn u64_max_is_still_a_count() {
    let v = json!({"non_criminal_count": u64::MAX, "criminal_count": 0});
    assert_eq!(CrimeCountSummary::from_json(&v), Ok(CrimeCountSummary::new(u64::MAX, 0)));
}

#[test]
fn serialized_summary_decodes_back() {
    let v = serde_json::to_value(CrimeCountSummary::new(120, 45)).expect("serialize");
    assert_eq!(v, json!({"non_criminal_count": 120, "criminal_count": 45}));
}

#[test]
fn non_object_body_is_rejected() {
    assert_eq!(
        CrimeCountSummary::from_json(&json!([120, 45])),
        Err(SchemaError::NotAnObject { found: "an array" })
    );
}
