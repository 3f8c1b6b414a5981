/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Resource endpoint families.
//!
//! Each family pairs entity types with the verbs and paths of one remote
//! resource. Responses arrive wrapped in an envelope key (`listing`,
//! `listings`, `reservation`, ...) which is unwrapped here before the body
//! is handed to the entity core.

pub mod auth;
pub mod availability_rules;
pub mod booking_settings;
pub mod calendar_operations;
pub mod calendars;
pub mod listing_descriptions;
pub mod listing_photos;
pub mod listing_rooms;
pub mod listings;
pub mod messages;
pub mod pricing_settings;
pub mod reservation_alterations;
pub mod reservations;
pub mod rule_group_timelines;
pub mod seasonal_rules;
pub mod threads;

use crate::transport::Transport;
use bnb_core::entity::create_all;
use bnb_core::{Entity, Error, RawPayload, Result};
use bnb_models::Paging;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Take the value stored under `key` out of a response body
pub(crate) fn unwrap_envelope(mut body: Value, key: &str) -> Result<Value> {
  body
    .as_object_mut()
    .and_then(|envelope| envelope.remove(key))
    .ok_or_else(|| Error::MissingEnvelope(key.to_string()))
}

fn into_payload(value: Value, key: &str) -> Result<RawPayload> {
  match value {
    Value::Object(raw) => Ok(raw),
    _ => Err(Error::InvalidShape { field: key.to_string(), expected: "an object" }),
  }
}

/// Build one entity from the object under `key`
pub(crate) fn entity_from<T: Entity>(body: Value, key: &str) -> Result<T> {
  let raw = into_payload(unwrap_envelope(body, key)?, key)?;
  T::create_from_payload(&raw)
}

/// Build every entity of the array under `key`
pub(crate) fn entities_from<T: Entity>(body: Value, key: &str) -> Result<Vec<T>> {
  create_all(key, &unwrap_envelope(body, key)?)
}

/// Merge the object under `key` into an entity the caller already holds
pub(crate) fn fill_from<T: Entity>(target: &mut T, body: Value, key: &str) -> Result<()> {
  let raw = into_payload(unwrap_envelope(body, key)?, key)?;
  target.fill_from_payload(&raw)?;
  Ok(())
}

/// Paging block of a list response; absent paging reads as empty
pub(crate) fn paging_from(body: &Value) -> Result<Paging> {
  match body.get("paging") {
    Some(paging) if !paging.is_null() => Ok(serde_json::from_value(paging.clone())?),
    _ => Ok(Paging::default()),
  }
}

/// Decode the object under `key` into a plain serde type
pub(crate) fn decode_from<T: DeserializeOwned>(body: Value, key: &str) -> Result<T> {
  Ok(serde_json::from_value(unwrap_envelope(body, key)?)?)
}

/// Export an entity as a JSON request body, without null fields
pub(crate) fn body_of<T: Entity>(entity: &T) -> Value {
  Value::Object(entity.export_payload(true))
}


#[cfg(test)]
mod tests {
  use super::*;
  use bnb_models::Listing;
  use serde_json::json;

  #[test]
  fn test_unwrap_envelope_missing_key() {
    let result = unwrap_envelope(json!({ "listings": [] }), "listing");
    assert!(matches!(result, Err(Error::MissingEnvelope(key)) if key == "listing"));
  }

  #[test]
  fn test_entity_from_rejects_non_object() {
    let result = entity_from::<Listing>(json!({ "listing": [1, 2] }), "listing");
    assert!(matches!(result, Err(Error::InvalidShape { .. })));
  }

  #[test]
  fn test_paging_defaults_when_absent() {
    assert_eq!(paging_from(&json!({ "listings": [] })).unwrap(), Paging::default());
    let paging = paging_from(&json!({ "paging": { "total_count": 2 } })).unwrap();
    assert_eq!(paging.total_count, Some(2));
  }

  #[test]
  fn test_endpoint_base_exposes_transport() {
    let transport = Arc::new(Transport::new_mock("https://mock.airbnb.test/v2/"));
    let endpoints = listings::ListingEndpoints::new(transport);
    assert_eq!(endpoints.transport().base_url().as_str(), "https://mock.airbnb.test/v2/");
  }
}
