//! Static schema descriptors.
//!
//! A [`Schema`] is the data half of an entity type: which fields it declares,
//! which of them must be present on inbound payloads, which never leave the
//! process, and which hold nested sub-entities. The generic routines in
//! [`Record`](super::Record) consult it instead of reflecting over the type.

use super::{Entity, Marshal, RawPayload};
use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;

/// Initial value of a declared field before any payload is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
  Str(&'static str),
  Int(i64),
  Bool(bool),
  EmptyList,
}

impl Literal {
  pub fn to_value(self) -> Value {
    match self {
      Literal::Str(s) => Value::String(s.to_string()),
      Literal::Int(i) => Value::from(i),
      Literal::Bool(b) => Value::Bool(b),
      Literal::EmptyList => Value::Array(Vec::new()),
    }
  }
}

type Builder = fn(&str, &Value) -> Result<Box<dyn Marshal>>;

/// A field holding one nested entity, or a sequence of them
#[derive(Clone, Copy)]
pub struct Nested {
  pub field: &'static str,
  build: Builder,
}

impl Nested {
  /// Declare `field` as holding entities of type `T`
  pub const fn of<T: Entity>(field: &'static str) -> Self {
    Self { field, build: build_nested::<T> }
  }

  /// Run `T::create_from_payload` on one raw element
  pub fn build(&self, value: &Value) -> Result<Box<dyn Marshal>> {
    (self.build)(self.field, value)
  }
}

impl fmt::Debug for Nested {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Nested").field(&self.field).finish()
  }
}

fn build_nested<T: Entity>(field: &str, value: &Value) -> Result<Box<dyn Marshal>> {
  let raw = value
    .as_object()
    .ok_or_else(|| Error::InvalidShape { field: field.to_string(), expected: "an object" })?;
  Ok(Box::new(T::create_from_payload(raw)?))
}

/// Per-type marshaling schema
#[derive(Debug)]
pub struct Schema {
  /// Type name used in diagnostics
  pub entity: &'static str,
  /// Declared scalar/opaque fields, exported as null while unset
  pub fields: &'static [&'static str],
  /// Values a fresh instance starts with
  pub defaults: &'static [(&'static str, Literal)],
  /// Keys that must be present and non-null on inbound payloads
  pub required: &'static [&'static str],
  /// Keys never written to an outbound payload
  pub excluded_from_export: &'static [&'static str],
  /// Fields holding at most one nested entity
  pub nested_single: &'static [Nested],
  /// Fields holding an ordered sequence of nested entities
  pub nested_many: &'static [Nested],
}

impl Schema {
  /// Base for struct-update syntax in schema statics
  pub const EMPTY: Schema = Schema {
    entity: "",
    fields: &[],
    defaults: &[],
    required: &[],
    excluded_from_export: &[],
    nested_single: &[],
    nested_many: &[],
  };

  /// Every required key that is absent or null in `raw`, in declaration order
  pub fn missing_fields(&self, raw: &RawPayload) -> Vec<String> {
    self
      .required
      .iter()
      .filter(|name| raw.get(**name).map_or(true, Value::is_null))
      .map(|name| name.to_string())
      .collect()
  }

  /// Fail with the complete list of missing required fields
  pub fn validate(&self, raw: &RawPayload) -> Result<()> {
    let missing = self.missing_fields(raw);
    if missing.is_empty() {
      Ok(())
    } else {
      Err(Error::MissingRequiredFields { entity: self.entity, fields: missing })
    }
  }

  pub fn nested_single_for(&self, name: &str) -> Option<&Nested> {
    self.nested_single.iter().find(|n| n.field == name)
  }

  pub fn nested_many_for(&self, name: &str) -> Option<&Nested> {
    self.nested_many.iter().find(|n| n.field == name)
  }

  pub fn is_excluded(&self, name: &str) -> bool {
    self.excluded_from_export.contains(&name)
  }

  /// Whether `name` is part of the declared shape (as opposed to a pass-through key)
  pub fn is_declared(&self, name: &str) -> bool {
    self.fields.contains(&name)
      || self.defaults.iter().any(|(field, _)| *field == name)
      || self.nested_single_for(name).is_some()
      || self.nested_many_for(name).is_some()
  }
}
