//! The entity marshaling core.
//!
//! An entity is a thin typed wrapper around a [`Record`]. The type supplies
//! a static [`Schema`] and an [`Entity::instantiate`] constructor taking the
//! fields its `new` function mandates; construction, filling and export are
//! provided here once for all types.
//!
//! ```ignore
//! static SCHEMA: Schema = Schema {
//!   entity: "ThreadRole",
//!   fields: &["role"],
//!   defaults: &[("user_ids", Literal::EmptyList)],
//!   required: &["role"],
//!   ..Schema::EMPTY
//! };
//! ```
//!
//! Filling the same instance twice appends to nested-many fields instead of
//! replacing them. Callers relying on replacement must build a fresh entity;
//! concurrent fills of one instance need external serialization.

mod accessors;
mod args;
mod record;
mod schema;

pub use args::{optional_f64, optional_i64, optional_str, required_i64, required_str};
pub use record::{strip_nulls, Record};
pub use schema::{Literal, Nested, Schema};

use crate::error::Result;
use std::any::Any;
use std::fmt;

/// Decoded JSON object as received from or sent to the API
pub type RawPayload = serde_json::Map<String, serde_json::Value>;

/// A typed record mirroring one remote resource.
pub trait Entity: Any + Clone + fmt::Debug + Send + Sync {
  /// Static schema of this type
  fn schema() -> &'static Schema;

  /// Build an instance from the constructor-mandated fields only.
  ///
  /// Runs after required-field validation, so mandated keys are present;
  /// a value of the wrong type fails with `InvalidShape`.
  fn instantiate(raw: &RawPayload) -> Result<Self>;

  fn record(&self) -> &Record;

  fn record_mut(&mut self) -> &mut Record;

  /// Validate, construct and fill from a raw inbound payload.
  ///
  /// Unknown keys are kept as pass-through fields. Fails with
  /// `MissingRequiredFields` naming every absent required key; no partial
  /// entity is ever returned.
  fn create_from_payload(raw: &RawPayload) -> Result<Self> {
    Self::schema().validate(raw)?;
    let mut entity = Self::instantiate(raw)?;
    entity.fill_from_payload(raw)?;
    Ok(entity)
  }

  /// Merge a (possibly partial) payload into this entity, without validation
  fn fill_from_payload(&mut self, fields: &RawPayload) -> Result<&mut Self> {
    self.record_mut().fill(fields)?;
    Ok(self)
  }

  /// Outbound payload. Override to normalize values before sending.
  fn export_payload(&self, without_nulls: bool) -> RawPayload {
    self.record().export(without_nulls)
  }

  /// Pass-through keys the schema does not declare
  fn extra_fields(&self) -> RawPayload {
    self
      .record()
      .extra_fields()
      .map(|(name, value)| (name.clone(), value.clone()))
      .collect()
  }
}

/// Object-safe face of an entity, used for nested storage
pub trait Marshal: fmt::Debug + Send + Sync {
  fn export(&self, without_nulls: bool) -> RawPayload;
  fn entity_name(&self) -> &'static str;
  fn as_any(&self) -> &dyn Any;
  fn as_any_mut(&mut self) -> &mut dyn Any;
  fn clone_boxed(&self) -> Box<dyn Marshal>;
}

impl<T: Entity> Marshal for T {
  fn export(&self, without_nulls: bool) -> RawPayload {
    self.export_payload(without_nulls)
  }

  fn entity_name(&self) -> &'static str {
    T::schema().entity
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }

  fn clone_boxed(&self) -> Box<dyn Marshal> {
    Box::new(self.clone())
  }
}

impl Clone for Box<dyn Marshal> {
  fn clone(&self) -> Self {
    self.clone_boxed()
  }
}

/// Build every element of a JSON array as `T`
pub fn create_all<T: Entity>(field: &str, value: &serde_json::Value) -> Result<Vec<T>> {
  let items = value.as_array().ok_or_else(|| crate::Error::InvalidShape {
    field: field.to_string(),
    expected: "an array of objects",
  })?;
  items
    .iter()
    .map(|item| {
      let raw = item.as_object().ok_or_else(|| crate::Error::InvalidShape {
        field: field.to_string(),
        expected: "an object",
      })?;
      T::create_from_payload(raw)
    })
    .collect()
}

#[cfg(test)]
mod tests;
