// Host-side tests for wire frame parsing and encoding.

use fsr_core::{CoreError, Inbound, Outbound};

#[test]
fn decodes_values_frame() {
    let f = Inbound::decode(r#"["values", {"values": [1, 2.5, 3, 4]}]"#).unwrap();
    assert_eq!(f, Inbound::Values(vec![1.0, 2.5, 3.0, 4.0]));
    assert_eq!(f.tag(), "values");
}

#[test]
fn decodes_thresholds_frame() {
    let f = Inbound::decode(r#"["thresholds", {"thresholds": [10, 20, 30, 40]}]"#).unwrap();
    assert_eq!(f, Inbound::Thresholds(vec![10.0, 20.0, 30.0, 40.0]));
}

#[test]
fn unknown_tag_decodes_to_unknown() {
    let f = Inbound::decode(r#"["battery", {"level": 0.5}]"#).unwrap();
    assert_eq!(
        f,
        Inbound::Unknown {
            tag: "battery".to_string()
        }
    );
}

#[test]
fn rejects_frames_that_are_not_tag_payload_pairs() {
    for text in [
        r#"{"values": [1]}"#,
        r#"["values"]"#,
        "[]",
        "not json",
        r#"[1, {}]"#,
        r#"["values", {"values": [1, 2, 3, 4]}, "x"]"#,
        r#"["battery", {}, {}]"#,
    ] {
        match Inbound::decode(text) {
            Err(CoreError::MalformedFrame(_)) => {}
            other => panic!("expected MalformedFrame for {text}, got {other:?}"),
        }
    }
}

#[test]
fn rejects_recognized_tag_with_bad_payload() {
    let r = Inbound::decode(r#"["values", {"values": "1,2,3,4"}]"#);
    assert!(matches!(r, Err(CoreError::MalformedFrame(_))));
    let r = Inbound::decode(r#"["thresholds", {"values": [1, 2, 3, 4]}]"#);
    assert!(matches!(r, Err(CoreError::MalformedFrame(_))));
}

#[test]
fn rejects_channels_that_overflow_f32() {
    for text in [
        r#"["values", {"values": [1e300, 2, 3, 4]}]"#,
        r#"["values", {"values": [1, -1e300, 3, 4]}]"#,
        r#"["thresholds", {"thresholds": [10, 20, 30, 1e39]}]"#,
    ] {
        match Inbound::decode(text) {
            Err(CoreError::MalformedFrame(_)) => {}
            other => panic!("expected MalformedFrame for {text}, got {other:?}"),
        }
    }
}

#[test]
fn update_threshold_encodes_as_three_element_array() {
    let msg = Outbound::UpdateThreshold {
        thresholds: vec![10.0, 20.0, 99.0, 40.0],
        index: 2,
    };
    assert_eq!(msg.tag(), "update_threshold");
    let v: serde_json::Value = serde_json::from_str(&msg.encode()).unwrap();
    assert_eq!(v, serde_json::json!(["update_threshold", [10.0, 20.0, 99.0, 40.0], 2]));
}
