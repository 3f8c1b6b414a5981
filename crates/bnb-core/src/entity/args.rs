//! Typed extraction of constructor arguments from a raw payload.
//!
//! Scalars are coerced the way the platform's `_str` id twins suggest: a
//! number is accepted where text is expected and numeric text is accepted
//! where a number is expected. Objects, arrays and booleans are rejected.

use super::RawPayload;
use crate::error::{Error, Result};
use serde_json::Value;

fn shape(field: &str, expected: &'static str) -> Error {
  Error::InvalidShape { field: field.to_string(), expected }
}

fn missing(entity: &'static str, field: &str) -> Error {
  Error::MissingRequiredFields { entity, fields: vec![field.to_string()] }
}

pub fn optional_str(raw: &RawPayload, field: &str) -> Result<Option<String>> {
  match raw.get(field) {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s.clone())),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(_) => Err(shape(field, "a string")),
  }
}

pub fn optional_i64(raw: &RawPayload, field: &str) -> Result<Option<i64>> {
  match raw.get(field) {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| shape(field, "an integer")),
    Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| shape(field, "an integer")),
    Some(_) => Err(shape(field, "an integer")),
  }
}

pub fn optional_f64(raw: &RawPayload, field: &str) -> Result<Option<f64>> {
  match raw.get(field) {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| shape(field, "a number")),
    Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| shape(field, "a number")),
    Some(_) => Err(shape(field, "a number")),
  }
}

pub fn required_str(raw: &RawPayload, entity: &'static str, field: &str) -> Result<String> {
  optional_str(raw, field)?.ok_or_else(|| missing(entity, field))
}

pub fn required_i64(raw: &RawPayload, entity: &'static str, field: &str) -> Result<i64> {
  optional_i64(raw, field)?.ok_or_else(|| missing(entity, field))
}
