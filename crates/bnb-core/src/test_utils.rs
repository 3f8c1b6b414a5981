//! Fixtures shared by the bnb-* test suites

use crate::entity::RawPayload;
use serde_json::Value;

/// Turn a `json!` object literal into a raw payload
pub fn payload(value: Value) -> RawPayload {
  match value {
    Value::Object(map) => map,
    other => panic!("Expected a JSON object fixture, got: {}", other),
  }
}

/// Assert that every key of `expected` appears in `actual` with the same value
pub fn assert_contains_payload(actual: &RawPayload, expected: &RawPayload) {
  for (name, value) in expected {
    assert_eq!(
      actual.get(name),
      Some(value),
      "Field `{}` differs:\n  actual payload: {}\n  expected value: {}",
      name,
      Value::Object(actual.clone()),
      value
    );
  }
}

/// Keys of `payload` whose value is non-null, sorted
pub fn non_null_keys(payload: &RawPayload) -> Vec<String> {
  let mut keys: Vec<String> =
    payload.iter().filter(|(_, v)| !v.is_null()).map(|(k, _)| k.clone()).collect();
  keys.sort();
  keys
}
