//! # End-to-End Change-Detection Properties
//!
//! Exercises the full pipeline — ingestion, canonicalization, salted
//! fingerprint, token codec, orchestration — the way a host caller drives
//! it: evaluate, persist the token text, re-supply it on the next call.
//!
//! The known-answer vectors were computed independently with Python
//! `hashlib.sha256`.

use driftmark_core::{CanonicalizationError, StructuredValue};
use driftmark_crypto::{FixedSaltSource, Salt};
use driftmark_detect::{ChangeDetector, EvaluateRequest};

const TEST_SALT_HEX: &str = "000102030405060708090a0b0c0d0e0f";

fn test_salt() -> Salt {
    Salt::from_hex(TEST_SALT_HEX).expect("test salt is valid hex")
}

fn fixed_detector() -> ChangeDetector<FixedSaltSource> {
    ChangeDetector::with_salt_source(FixedSaltSource::new(test_salt()))
}

fn value(json: serde_json::Value) -> StructuredValue {
    StructuredValue::from(json)
}

// ---------------------------------------------------------------------------
// Known-answer vectors
// ---------------------------------------------------------------------------

#[test]
fn test_known_token_for_a_equals_1() {
    let evaluation = fixed_detector().evaluate(&value(serde_json::json!({"a": 1})), None, false);
    assert_eq!(
        evaluation.token.to_hex(),
        format!(
            "{TEST_SALT_HEX}{}",
            "73802e647cddcaf79966c6081c04084680caf4e2865232e68e6b23616d5f1c6d"
        )
    );
}

#[test]
fn test_known_token_after_change() {
    let mut detector = fixed_detector();
    let first = detector.evaluate(&value(serde_json::json!({"a": 1})), None, false);
    let second = detector.evaluate(
        &value(serde_json::json!({"a": 2})),
        Some(&first.token.to_hex()),
        false,
    );
    assert!(second.data_changed);
    assert_eq!(
        second.token.to_hex(),
        format!(
            "{TEST_SALT_HEX}{}",
            "7a1508db6c00a6d017328a9442b00815cb68f26321e40ad0250ab85d37418e19"
        )
    );
}

// ---------------------------------------------------------------------------
// Unchanged-value stability
// ---------------------------------------------------------------------------

#[test]
fn test_unchanged_value_returns_identical_token() {
    let mut detector = ChangeDetector::new();
    let v = value(serde_json::json!({
        "name": "worker",
        "retries": 3,
        "hosts": ["alpha", "beta"],
    }));
    let first = detector.evaluate(&v, None, false);
    let token_text = first.token.to_hex();

    // Repeated evaluations keep carrying the very same token forward.
    for _ in 0..3 {
        let next = detector.evaluate(&v, Some(&token_text), false);
        assert!(!next.data_changed);
        assert_eq!(next.token.to_hex(), token_text);
    }
}

#[test]
fn test_key_order_invariance_across_evaluations() {
    // YAML mappings preserve source order, so these two documents really
    // do arrive differently ordered.
    let forward: serde_yaml::Value = serde_yaml::from_str("a: 1\nb: 2").unwrap();
    let backward: serde_yaml::Value = serde_yaml::from_str("b: 2\na: 1").unwrap();

    let mut detector = ChangeDetector::new();
    let first = detector.evaluate(&StructuredValue::from_yaml(&forward).unwrap(), None, false);
    let second = detector.evaluate(
        &StructuredValue::from_yaml(&backward).unwrap(),
        Some(&first.token.to_hex()),
        false,
    );
    assert!(!second.data_changed);
    assert_eq!(second.token, first.token);
}

// ---------------------------------------------------------------------------
// Change detection
// ---------------------------------------------------------------------------

#[test]
fn test_changed_value_mints_new_token() {
    let mut detector = ChangeDetector::new();
    let first = detector.evaluate(&value(serde_json::json!({"a": 1})), None, false);
    let second = detector.evaluate(
        &value(serde_json::json!({"a": 2})),
        Some(&first.token.to_hex()),
        false,
    );
    assert!(second.data_changed);
    assert_ne!(second.token, first.token);
    assert_ne!(second.token.salt(), first.token.salt());
}

#[test]
fn test_sequence_reorder_is_a_change() {
    let mut detector = ChangeDetector::new();
    let first = detector.evaluate(&value(serde_json::json!([1, 2, 3])), None, false);
    let second = detector.evaluate(
        &value(serde_json::json!([3, 2, 1])),
        Some(&first.token.to_hex()),
        false,
    );
    assert!(second.data_changed);
}

#[test]
fn test_sensitivity_under_fixed_salt() {
    let salt = test_salt();
    let pairs = [
        (serde_json::json!({"a": 1}), serde_json::json!({"a": "1"})),
        (serde_json::json!(null), serde_json::json!(false)),
        (serde_json::json!([]), serde_json::json!([null])),
        (serde_json::json!({"a": [1, 2]}), serde_json::json!({"a": [2, 1]})),
    ];
    for (left, right) in pairs {
        let a = ChangeDetector::with_salt_source(FixedSaltSource::new(salt))
            .evaluate(&value(left.clone()), None, false);
        let b = ChangeDetector::with_salt_source(FixedSaltSource::new(salt))
            .evaluate(&value(right.clone()), None, false);
        assert_ne!(a.token, b.token, "{left} vs {right}");
    }
}

// ---------------------------------------------------------------------------
// Forced refresh
// ---------------------------------------------------------------------------

#[test]
fn test_forced_refresh_rotates_salt_on_unchanged_value() {
    let mut detector = ChangeDetector::new();
    let v = value(serde_json::json!({"a": 1}));
    let first = detector.evaluate(&v, None, false);
    let second = detector.evaluate(&v, Some(&first.token.to_hex()), true);

    assert!(!second.data_changed);
    assert_ne!(second.token, first.token);

    // The rotated token still verifies the unchanged value next call.
    let third = detector.evaluate(&v, Some(&second.token.to_hex()), false);
    assert!(!third.data_changed);
    assert_eq!(third.token, second.token);
}

// ---------------------------------------------------------------------------
// Malformed-token tolerance
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_previous_token_never_raises() {
    let wrong_length = "ab".repeat(40);
    let non_hex = "zz".repeat(48);
    let cases = ["not-hex", "", wrong_length.as_str(), non_hex.as_str()];

    let mut detector = ChangeDetector::new();
    for bad in cases {
        let evaluation = detector.evaluate(&value(serde_json::json!({"a": 1})), Some(bad), false);
        assert!(evaluation.data_changed, "previous token {bad:?}");
        assert_eq!(evaluation.token.to_hex().len(), 96);
    }
}

// ---------------------------------------------------------------------------
// Host boundary
// ---------------------------------------------------------------------------

#[test]
fn test_host_request_cycle() {
    let mut detector = ChangeDetector::new();
    let request = EvaluateRequest {
        data: serde_yaml::from_str("service: api\nports: [80, 443]").unwrap(),
        previous_hash: None,
        force_new_salt: false,
    };
    let first = detector.handle(&request).unwrap();
    assert!(first.data_changed);

    let unchanged = EvaluateRequest {
        previous_hash: Some(first.hash.clone()),
        ..request.clone()
    };
    let second = detector.handle(&unchanged).unwrap();
    assert!(!second.data_changed);
    assert_eq!(second.hash, first.hash);

    let changed = EvaluateRequest {
        data: serde_yaml::from_str("service: api\nports: [80, 8443]").unwrap(),
        previous_hash: Some(first.hash),
        force_new_salt: false,
    };
    let third = detector.handle(&changed).unwrap();
    assert!(third.data_changed);
    assert_ne!(third.hash, second.hash);
}

#[test]
fn test_unsupported_input_produces_no_token() {
    let mut detector = ChangeDetector::new();
    let request = EvaluateRequest {
        data: serde_yaml::from_str("payload: !bin 'ff00'").unwrap(),
        previous_hash: None,
        force_new_salt: false,
    };
    let err = detector.handle(&request).unwrap_err();
    match err {
        CanonicalizationError::UnsupportedType { kind, repr } => {
            assert_eq!(kind, "tagged value");
            assert!(repr.contains("bin"));
        }
        other => panic!("expected UnsupportedType, got: {other}"),
    }
}

#[test]
fn test_non_finite_float_rejected_at_boundary() {
    let mut detector = ChangeDetector::new();
    let request = EvaluateRequest {
        data: serde_yaml::from_str("ratio: .nan").unwrap(),
        previous_hash: None,
        force_new_salt: false,
    };
    assert!(matches!(
        detector.handle(&request),
        Err(CanonicalizationError::UnsupportedType { kind: "non-finite number", .. })
    ));
}
