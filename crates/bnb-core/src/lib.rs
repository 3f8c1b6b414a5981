//! # bnb-core
//!
//! Shared foundation for the `bnb-*` crates: the entity marshaling core,
//! client configuration and the common error type.
//!
//! Every remote resource is modelled as an [`entity::Entity`] backed by a
//! [`entity::Record`] and described by a static [`entity::Schema`]. The
//! schema drives three uniform operations:
//!
//! - [`entity::Entity::create_from_payload`] validates the required fields of
//!   a decoded JSON object and builds the entity, recursing into nested
//!   sub-entities.
//! - [`entity::Entity::fill_from_payload`] merges a partial payload into an
//!   existing entity.
//! - [`entity::Entity::export_payload`] turns the entity back into a JSON
//!   object for an outbound request, dropping read-only fields and, on
//!   request, null values.

pub mod config;
pub mod entity;
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use entity::{Entity, Literal, Marshal, Nested, RawPayload, Record, Schema};
pub use error::{Error, Result};

#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde_json;

/// Base URL for the Airbnb v2 API
pub const AIRBNB_BASE_URL: &str = "https://api.airbnb.com/v2/";

/// Header carrying the application client id on user-scoped calls
pub const API_KEY_HEADER: &str = "X-Airbnb-API-Key";

/// Header carrying the end user's OAuth access token
pub const OAUTH_TOKEN_HEADER: &str = "X-Airbnb-Oauth-Token";

/// User-Agent sent when no application name is configured
pub const DEFAULT_APP_NAME: &str = "bnb-client/0.1.0";
