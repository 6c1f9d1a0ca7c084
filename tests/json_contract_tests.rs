use chart_scale::api::{
    SCALE_JSON_SCHEMA_V1, ScaleCalculatorConfig, ScaleJsonContractV1, ScaleRequest,
};
use chart_scale::{ScaleError, coordinate_scale_calculator};

#[test]
fn request_parses_external_camel_case_contract() {
    let request = ScaleRequest::from_json_str(
        r#"{"min": -10, "max": 100, "offsetSize": 264, "stepCount": 5}"#,
    )
    .expect("parse request");

    assert_eq!(
        request,
        ScaleRequest::new(-10.0, 100.0, 264.0).with_step_count(5)
    );
    assert_eq!(request.minimum_step_size, None);
}

#[test]
fn scale_serializes_to_output_contract() {
    let request = ScaleRequest::new(-10.0, 100.0, 264.0).with_step_count(5);
    let scale = coordinate_scale_calculator(&request).expect("valid request");

    let json = scale.to_json_pretty().expect("serialize scale");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["limit"]["min"], -20.0);
    assert_eq!(value["limit"]["max"], 100.0);
    assert_eq!(value["step"], 20.0);
    assert_eq!(value["stepCount"], 6.0);
}

#[test]
fn optional_request_fields_are_omitted() {
    let json = ScaleRequest::new(0.0, 1.0, 100.0)
        .to_json_pretty()
        .expect("serialize request");
    assert!(!json.contains("stepCount"));
    assert!(!json.contains("minimumStepSize"));
    assert!(json.contains("offsetSize"));
}

#[test]
fn contract_v1_round_trips_request_and_scale() {
    let request = ScaleRequest::new(5.0, 95.0, 176.0).with_minimum_step_size(1.0);
    let scale = coordinate_scale_calculator(&request).expect("valid request");

    let json = scale
        .to_json_contract_v1_pretty(request)
        .expect("serialize contract");
    assert!(json.contains("\"schemaVersion\": 1"));

    let payload = ScaleJsonContractV1::from_json_str(&json).expect("parse contract");
    assert_eq!(payload.schema_version, SCALE_JSON_SCHEMA_V1);
    assert_eq!(payload.request, request);
    assert_eq!(payload.scale, scale);
}

#[test]
fn contract_rejects_unknown_schema_version() {
    let json = r#"{
        "schemaVersion": 2,
        "request": {"min": 0, "max": 1, "offsetSize": 100},
        "scale": {"limit": {"min": 0, "max": 1}, "step": 0.5, "stepCount": 2}
    }"#;

    let err = ScaleJsonContractV1::from_json_str(json).expect_err("unsupported version");
    assert!(matches!(err, ScaleError::InvalidData(message) if message.contains("version")));
}

#[test]
fn malformed_request_is_invalid_data() {
    let err = ScaleRequest::from_json_str(r#"{"min": 0}"#).expect_err("missing fields");
    assert!(matches!(err, ScaleError::InvalidData(_)));
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config: ScaleCalculatorConfig =
        serde_json::from_str(r#"{"pixelsPerStep": 64}"#).expect("parse config");
    assert_eq!(config.pixels_per_step, 64.0);
    assert_eq!(config.snap_table.values(), &[1.0, 2.0, 5.0, 10.0]);

    let config: ScaleCalculatorConfig = serde_json::from_str("{}").expect("parse config");
    assert_eq!(config, ScaleCalculatorConfig::default());
}

#[test]
fn config_rejects_unsorted_snap_table() {
    let result = serde_json::from_str::<ScaleCalculatorConfig>(r#"{"snapTable": [5, 2, 1]}"#);
    assert!(result.is_err());
}
