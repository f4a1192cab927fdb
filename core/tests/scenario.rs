//! Scenario input tests — JSON shape and boundary validation.

use roi_core::{error::RoiError, scenario::{ScenarioInput, ScenarioRecord}};

fn valid() -> ScenarioInput {
    ScenarioInput {
        scenario_name: "valid".into(),
        monthly_invoice_volume: 2000.0,
        num_ap_staff: 3.0,
        avg_hours_per_invoice: 0.17,
        hourly_wage: 30.0,
        error_rate_manual: 0.005,
        error_cost: 100.0,
        time_horizon_months: 36.0,
        one_time_implementation_cost: 50_000.0,
    }
}

#[test]
fn name_and_implementation_cost_default_when_absent() {
    let json = r#"{
        "monthly_invoice_volume": 2000,
        "num_ap_staff": 3,
        "avg_hours_per_invoice": 0.17,
        "hourly_wage": 30,
        "error_rate_manual": 0.005,
        "error_cost": 100,
        "time_horizon_months": 36
    }"#;
    let input: ScenarioInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.scenario_name, "");
    assert_eq!(input.one_time_implementation_cost, 0.0);
    assert_eq!(input.monthly_invoice_volume, 2000.0);
}

#[test]
fn missing_required_field_is_rejected_by_deserialization() {
    let json = r#"{ "scenario_name": "partial", "monthly_invoice_volume": 10 }"#;
    let err = serde_json::from_str::<ScenarioInput>(json).unwrap_err();
    assert!(err.to_string().contains("num_ap_staff"), "{err}");
}

#[test]
fn record_serializes_flat_with_id() {
    let record = ScenarioRecord { id: 7, input: valid() };
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["id"], 7);
    assert_eq!(value["scenario_name"], "valid");
    assert_eq!(value["hourly_wage"], 30.0);

    let back: ScenarioRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn validate_accepts_reference_and_zero_values() {
    assert!(valid().validate().is_ok());
    let zeros = ScenarioInput {
        monthly_invoice_volume: 0.0,
        one_time_implementation_cost: 0.0,
        time_horizon_months: 0.0,
        ..valid()
    };
    assert!(zeros.validate().is_ok());
}

#[test]
fn validate_rejects_negative_values() {
    let input = ScenarioInput { hourly_wage: -1.0, ..valid() };
    match input.validate() {
        Err(RoiError::Validation { field, .. }) => assert_eq!(field, "hourly_wage"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn validate_rejects_non_finite_values() {
    let input = ScenarioInput { error_cost: f64::NAN, ..valid() };
    assert!(matches!(
        input.validate(),
        Err(RoiError::Validation { field: "error_cost", .. })
    ));

    let input = ScenarioInput { time_horizon_months: f64::INFINITY, ..valid() };
    assert!(matches!(
        input.validate(),
        Err(RoiError::Validation { field: "time_horizon_months", .. })
    ));
}

/// The manual error rate is only checked for finiteness.
#[test]
fn validate_does_not_enforce_error_rate_range() {
    assert!(ScenarioInput { error_rate_manual: 1.5, ..valid() }.validate().is_ok());
    assert!(ScenarioInput { error_rate_manual: -0.1, ..valid() }.validate().is_ok());
}

#[test]
fn display_name_falls_back_when_empty() {
    let unnamed = ScenarioInput { scenario_name: String::new(), ..valid() };
    assert_eq!(unnamed.display_name("report"), "report");
    assert_eq!(valid().display_name("report"), "valid");
}
