#![cfg(feature = "serde")]

use vect::Vec2;
use vect::codec::{self, CodecError};

#[test]
fn decodes_array_and_keyed_literals() {
    assert_eq!(codec::from_str("[3, 4]").unwrap(), Vec2::new(3.0, 4.0));
    assert_eq!(codec::from_str(r#"{"X":3,"Y":4}"#).unwrap(), Vec2::new(3.0, 4.0));
}

#[test]
fn encoder_only_writes_array_form() {
    let text = codec::to_string(Vec2::new(3.0, 4.0)).unwrap();
    assert_eq!(text, "[3.0,4.0]");
}

#[test]
fn round_trip_finite_values() {
    for v in [
        Vec2::ORIGIN,
        Vec2::new(1.0, -2.0),
        Vec2::new(0.1, 1e300),
        Vec2::new(-f64::MIN_POSITIVE, f64::MAX),
    ] {
        let text = codec::to_string(v).unwrap();
        assert_eq!(codec::from_str(&text).unwrap(), v, "{text}");
    }
}

#[test]
fn non_finite_values_encode_as_null_and_read_back_as_zero() {
    let text = codec::to_string(Vec2::new(f64::NAN, f64::INFINITY)).unwrap();
    assert_eq!(text, "[null,null]");
    assert_eq!(codec::from_str(&text).unwrap(), Vec2::ORIGIN);

    let text = codec::to_string(Vec2::new(f64::NEG_INFINITY, 1.0)).unwrap();
    assert_eq!(codec::from_str(&text).unwrap(), Vec2::new(0.0, 1.0));
}

#[test]
fn lenient_inputs_from_older_producers() {
    let cases = [
        ("[1]", Vec2::new(1.0, 0.0)),
        ("[]", Vec2::ORIGIN),
        ("[1,2,3]", Vec2::new(1.0, 2.0)),
        ("null", Vec2::ORIGIN),
        (r#"{"X":null,"Y":2}"#, Vec2::new(0.0, 2.0)),
        (r#"{"X":1,"x":2}"#, Vec2::new(2.0, 0.0)),
    ];
    for (text, want) in cases {
        assert_eq!(codec::from_str(text).unwrap(), want, "{text}");
    }
}

#[test]
fn malformed_input_is_a_parse_error() {
    let err = codec::from_str("not json").unwrap_err();
    assert!(matches!(err, CodecError::Parse(_)));
}

#[test]
fn vectors_embed_in_other_documents() {
    let list: Vec<Vec2> = serde_json::from_str(r#"[[1,2],{"X":3,"Y":4}]"#).unwrap();
    assert_eq!(list, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[[1.0,2.0],[3.0,4.0]]");
}
