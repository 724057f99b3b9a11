use chart_publish::core::{Trace, TraceKind, TraceMode};
use chart_publish::error::ChartError;
use serde_json::json;

#[test]
fn scatter_trace_preserves_values() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![3.0, 1.0, 4.0, 1.5];
    let trace = Trace::scatter(x.clone(), y.clone()).expect("trace");

    assert_eq!(trace.kind(), TraceKind::Scatter);
    assert_eq!(trace.x(), x.as_slice());
    assert_eq!(trace.y(), y.as_slice());
    assert_eq!(trace.len(), 4);
    assert!(trace.name().is_none());
    assert!(trace.mode().is_none());
}

#[test]
fn scatter_trace_rejects_length_mismatch() {
    let err = Trace::scatter(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]).expect_err("mismatch");
    match err {
        ChartError::LengthMismatch { x_len, y_len } => {
            assert_eq!(x_len, 3);
            assert_eq!(y_len, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(
        Trace::scatter(Vec::new(), vec![1.0])
            .expect_err("mismatch")
            .is_input_error()
    );
}

#[test]
fn scatter_trace_rejects_non_finite_values() {
    let err = Trace::scatter(vec![0.0, f64::NAN], vec![0.0, 1.0]).expect_err("nan");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = Trace::scatter(vec![0.0, 1.0], vec![f64::INFINITY, 1.0]).expect_err("inf");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_trace_is_allowed() {
    let trace = Trace::scatter(Vec::new(), Vec::new()).expect("empty trace");
    assert!(trace.is_empty());
}

#[test]
fn trace_serializes_with_service_attribute_names() {
    let trace = Trace::scatter(vec![0.0, 1.0], vec![2.0, 3.0])
        .expect("trace")
        .with_name("series a")
        .with_mode(TraceMode::LinesMarkers);

    let value = serde_json::to_value(&trace).expect("serialize");
    assert_eq!(
        value,
        json!({
            "type": "scatter",
            "x": [0.0, 1.0],
            "y": [2.0, 3.0],
            "name": "series a",
            "mode": "lines+markers",
        })
    );
}

#[test]
fn decoded_trace_with_mismatched_lengths_fails_validation() {
    let trace: Trace =
        serde_json::from_str(r#"{"type":"scatter","x":[0,1,2],"y":[0,1]}"#).expect("decode");
    assert!(matches!(
        trace.validate(),
        Err(ChartError::LengthMismatch { x_len: 3, y_len: 2 })
    ));
}
