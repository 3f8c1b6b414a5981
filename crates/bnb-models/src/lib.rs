//! # bnb-models
//!
//! Entity models for the Airbnb v2 API.
//!
//! Each resource (listing, reservation, calendar, pricing, messaging thread)
//! is an [`Entity`](bnb_core::Entity): a static schema declaration plus
//! typed accessors over a mapping-backed record. The marshaling itself lives
//! in `bnb-core`; this crate only declares shapes.
//!
//! ## Usage
//!
//! ```ignore
//! use bnb_core::Entity;
//! use bnb_models::Listing;
//!
//! let raw = serde_json::from_str::<bnb_core::RawPayload>(&body)?;
//! let listing = Listing::create_from_payload(&raw)?;
//! let outbound = listing.export_payload(true);
//! ```

#![warn(clippy::all)]

/// Implement [`bnb_core::Entity`] for a struct with a `record` field.
///
/// The type provides `fn from_required(&RawPayload) -> Result<Self>`; any
/// extra tokens are spliced into the impl to override provided methods.
macro_rules! impl_entity {
  ($ty:ident, $schema:ident $(, { $($extra:tt)* })?) => {
    impl bnb_core::Entity for $ty {
      fn schema() -> &'static bnb_core::Schema {
        &$schema
      }

      fn instantiate(raw: &bnb_core::RawPayload) -> bnb_core::Result<Self> {
        Self::from_required(raw)
      }

      fn record(&self) -> &bnb_core::Record {
        &self.record
      }

      fn record_mut(&mut self) -> &mut bnb_core::Record {
        &mut self.record
      }

      $($($extra)*)?
    }
  };
}

pub mod auth;
pub mod availability;
pub mod calendar;
pub mod common;
pub mod listing;
pub mod messaging;
pub mod parameters;
pub mod pricing;
pub mod reservation;

pub use auth::*;
pub use availability::*;
pub use calendar::*;
pub use common::*;
pub use listing::*;
pub use messaging::*;
pub use parameters::*;
pub use pricing::*;
pub use reservation::*;
