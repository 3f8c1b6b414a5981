//! Mapping-backed storage shared by every entity.

use super::{Entity, Marshal, RawPayload, Schema};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field storage for one entity instance.
///
/// Scalar and pass-through values live in a JSON map; nested sub-entities
/// live in their own slots so that export can recurse into them. Nested
/// entities are owned exclusively by the record holding them.
#[derive(Debug, Clone)]
pub struct Record {
  schema: &'static Schema,
  values: RawPayload,
  single: BTreeMap<String, Box<dyn Marshal>>,
  many: BTreeMap<String, Vec<Box<dyn Marshal>>>,
}

impl Record {
  /// Empty record carrying the schema defaults
  pub fn new(schema: &'static Schema) -> Self {
    let values = schema
      .defaults
      .iter()
      .map(|(name, literal)| (name.to_string(), literal.to_value()))
      .collect();
    Self { schema, values, single: BTreeMap::new(), many: BTreeMap::new() }
  }

  pub fn schema(&self) -> &'static Schema {
    self.schema
  }

  /// Stored value for `name`, `None` when unset or null
  pub fn get(&self, name: &str) -> Option<&Value> {
    self.values.get(name).filter(|v| !v.is_null())
  }

  pub fn get_str(&self, name: &str) -> Option<&str> {
    self.get(name).and_then(Value::as_str)
  }

  pub fn get_i64(&self, name: &str) -> Option<i64> {
    self.get(name).and_then(Value::as_i64)
  }

  pub fn get_f64(&self, name: &str) -> Option<f64> {
    self.get(name).and_then(Value::as_f64)
  }

  pub fn get_bool(&self, name: &str) -> Option<bool> {
    self.get(name).and_then(Value::as_bool)
  }

  /// Store a raw value, replacing whatever was there
  pub fn set(&mut self, name: &str, value: impl Into<Value>) {
    self.values.insert(name.to_string(), value.into());
  }

  /// Keys that are not part of the declared schema
  pub fn extra_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
    self.values.iter().filter(|(name, _)| !self.schema.is_declared(name))
  }

  /// Typed view of a nested-single slot
  pub fn single<T: Entity>(&self, name: &str) -> Option<&T> {
    self.single.get(name).and_then(|e| e.as_any().downcast_ref::<T>())
  }

  pub fn single_mut<T: Entity>(&mut self, name: &str) -> Option<&mut T> {
    self.single.get_mut(name).and_then(|e| e.as_any_mut().downcast_mut::<T>())
  }

  /// Replace (or clear) a nested-single slot
  pub fn set_single<T: Entity>(&mut self, name: &str, entity: Option<T>) {
    match entity {
      Some(entity) => {
        self.single.insert(name.to_string(), Box::new(entity));
      }
      None => {
        self.single.remove(name);
      }
    }
  }

  /// Typed view of a nested-many sequence, in insertion order
  pub fn many<T: Entity>(&self, name: &str) -> impl Iterator<Item = &T> {
    self
      .many
      .get(name)
      .into_iter()
      .flatten()
      .filter_map(|e| e.as_any().downcast_ref::<T>())
  }

  /// Append to a nested-many sequence
  pub fn push_many<T: Entity>(&mut self, name: &str, entity: T) {
    self.many.entry(name.to_string()).or_default().push(Box::new(entity));
  }

  /// Merge `fields` into the record.
  ///
  /// Nested-single keys are rebuilt from their raw object, nested-many keys
  /// are appended to (never replaced), and everything else is stored
  /// verbatim. Not atomic: on error, keys before the failing one stay
  /// applied.
  pub fn fill(&mut self, fields: &RawPayload) -> Result<()> {
    for (name, value) in fields {
      if let Some(nested) = self.schema.nested_single_for(name) {
        if value.is_null() {
          self.single.remove(name);
        } else {
          let entity = nested.build(value)?;
          self.single.insert(name.clone(), entity);
        }
        self.values.remove(name);
      } else if let Some(nested) = self.schema.nested_many_for(name) {
        match value {
          Value::Null => {}
          Value::Array(items) => {
            let mut built = Vec::with_capacity(items.len());
            for item in items {
              built.push(nested.build(item)?);
            }
            self.many.entry(name.clone()).or_default().extend(built);
          }
          _ => {
            return Err(Error::InvalidShape { field: name.clone(), expected: "an array of objects" });
          }
        }
      } else {
        self.values.insert(name.clone(), value.clone());
      }
    }
    Ok(())
  }

  /// Snapshot the record as an outbound payload.
  ///
  /// Declared fields that were never set appear as null. Nested entities are
  /// exported in full (`without_nulls = false`) regardless of the flag, which
  /// only governs this level.
  pub fn export(&self, without_nulls: bool) -> RawPayload {
    let mut out = RawPayload::new();

    for name in self.schema.fields {
      out.insert(name.to_string(), Value::Null);
    }
    for nested in self.schema.nested_single {
      out.insert(nested.field.to_string(), Value::Null);
    }
    for nested in self.schema.nested_many {
      out.insert(nested.field.to_string(), Value::Array(Vec::new()));
    }

    for (name, value) in &self.values {
      out.insert(name.clone(), value.clone());
    }
    for (name, entity) in &self.single {
      out.insert(name.clone(), Value::Object(entity.export(false)));
    }
    for (name, entities) in &self.many {
      if entities.is_empty() {
        continue;
      }
      let items = entities.iter().map(|e| Value::Object(e.export(false))).collect();
      out.insert(name.clone(), Value::Array(items));
    }

    for name in self.schema.excluded_from_export {
      out.remove(*name);
    }
    if without_nulls {
      strip_nulls(&mut out);
    }
    out
  }
}

/// Drop every top-level key whose value is exactly null
pub fn strip_nulls(payload: &mut RawPayload) {
  payload.retain(|_, value| !value.is_null());
}
