use inference::{Prediction, RiskLevel};

use super::*;

fn prediction(level: RiskLevel) -> Prediction {
    Prediction {
        level,
        class_id: level.class_id(),
        votes: [0, 3, 0],
        nearest_distance: 0.42,
    }
}

#[test]
fn parses_comma_separated_indicators() {
    let values = parse_indicators("3500000, 650, 9.5, 25.0, 90.0").unwrap();
    assert_eq!(values, vec![3_500_000.0, 650.0, 9.5, 25.0, 90.0]);
}

#[test]
fn parses_whitespace_and_digit_grouping() {
    let values = parse_indicators("3_500_000 650 9.5 25.0 90.0").unwrap();
    assert_eq!(values[0], 3_500_000.0);
    assert_eq!(values.len(), 5);
}

#[test]
fn short_vectors_parse_and_are_left_to_the_core() {
    // Dimension enforcement belongs to the inference core, not the parser.
    let values = parse_indicators("1, 2, 3, 4").unwrap();
    assert_eq!(values.len(), 4);
}

#[test]
fn rejects_non_numeric_tokens() {
    assert!(parse_indicators("3500000, banyak, 9.5, 25.0, 90.0").is_err());
    assert!(parse_indicators("").is_err());
    assert!(parse_indicators("  , , ").is_err());
}

#[test]
fn verdict_carries_label_and_guidance() {
    let rendered = render_prediction(&prediction(RiskLevel::Rentan), false);
    assert!(rendered.contains("Rentan"));
    assert!(rendered.contains("votes 0/3/0"));
    assert!(rendered.contains(RiskLevel::Rentan.guidance()));
    assert!(!rendered.contains('\x1b'), "plain rendering must stay ANSI-free");
}

#[test]
fn verdict_color_follows_risk_level() {
    let aman = render_prediction(&prediction(RiskLevel::Aman), true);
    let rentan = render_prediction(&prediction(RiskLevel::Rentan), true);
    let rawan = render_prediction(&prediction(RiskLevel::Rawan), true);
    assert!(aman.contains("\x1b[32m"));
    assert!(rentan.contains("\x1b[33m"));
    assert!(rawan.contains("\x1b[31m"));
}

#[test]
fn unknown_class_renders_fallback_line() {
    let rendered = render_request_error(&inference::InferenceError::UnknownClass(99));
    assert!(rendered.contains("Unrecognized risk label"));
    assert!(rendered.contains("99"));
}

#[test]
fn dimension_mismatch_renders_rejection() {
    let err = inference::InferenceError::DimensionMismatch { expected: 5, got: 4 };
    let rendered = render_request_error(&err);
    assert!(rendered.starts_with("Input rejected"));
}

#[test]
fn prompt_header_lists_training_order() {
    let header = prompt_header();
    assert!(header.contains("harga_cabai"));
    assert!(header.contains("air_bersih"));
}
