use line_chart_rs::core::{Interpolation, Margins, Viewport};
use line_chart_rs::{ChartError, ChartOptions};

#[test]
fn options_parse_established_key_names() {
    let options = ChartOptions::from_json_str(
        r#"{ "XtickSize": 5, "YtickSize": 7, "interpolatorType": "basis" }"#,
    )
    .expect("valid options");

    assert_eq!(options.x_tick_count, 5);
    assert_eq!(options.y_tick_count, 7);
    assert_eq!(options.interpolation, Interpolation::Basis);
    assert_eq!(options.margins, Margins::new(30, 20, 30, 100));
    assert_eq!(options.canvas, Viewport::new(1024, 550));
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let options = ChartOptions::from_json_str("{}").expect("empty options");
    assert_eq!(options, ChartOptions::default());
    assert_eq!(options.interpolation, Interpolation::Linear);
    assert_eq!(options.x_tick_count, 10);
    assert_eq!(options.y_tick_count, 10);
}

#[test]
fn unknown_interpolator_is_rejected_by_name() {
    let err = ChartOptions::from_json_str(r#"{ "interpolatorType": "wobbly" }"#)
        .expect_err("unsupported interpolation");
    assert_eq!(err, ChartError::UnsupportedInterpolation("wobbly".to_owned()));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ChartOptions::from_json_str("{ XtickSize: 5").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ChartOptions::from_json_str(r#"{ "XtickSize": "five" }"#).expect_err("wrong type");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn options_round_trip_through_json() {
    let options = ChartOptions::new()
        .with_x_tick_count(4)
        .with_y_tick_count(6)
        .with_interpolation(Interpolation::StepAfter)
        .with_margins(Margins::new(10, 10, 20, 40))
        .with_canvas(Viewport::new(640, 360));

    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"XtickSize\": 4"));
    assert!(json.contains("\"interpolatorType\": \"step-after\""));

    let restored = ChartOptions::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, options);
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_noop_without_telemetry_feature() {
    assert!(!line_chart_rs::telemetry::init_default_tracing());
}
