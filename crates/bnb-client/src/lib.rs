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


//! # bnb-client
//!
//! Async client for the Airbnb v2 API.
//!
//! Entities from `bnb-models` are exported into request bodies and rebuilt
//! from response envelopes through the `bnb-core` marshaling layer. Each
//! resource family has its own endpoint struct, all reachable from
//! [`BnbClient`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use bnb_client::{BnbClient, Listing};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BnbClient::from_env()?;
//!     let token = std::env::var("AIRBNB_USER_TOKEN")?;
//!
//!     let mut listing = Listing::new("Lakeside cabin", Some("US".into()), Some("Tahoe".into()), None, None, Some(180));
//!     client.listings().create_listing(&mut listing, &token).await?;
//!     println!("Created listing {:?}", listing.id());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Every request carries the application client id and secret as basic
//! auth. Calls on behalf of a host take that host's OAuth token, obtained
//! through [`AuthEndpoints`].
//!
//! ## Error Handling
//!
//! All methods return `Result<T, bnb_core::Error>`. Rate-limited and
//! server-side failures are retried with exponential backoff before the
//! error is returned. POST requests are only retried when rate-limited.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// The `BnbClient` facade
pub mod client;
/// Endpoint structs, one per resource family
pub mod endpoints;
/// HTTP transport with authentication and retries
pub mod transport;

pub use bnb_core::{Config, Entity, Error, Result};
pub use bnb_models::*;
pub use client::BnbClient;

pub use endpoints::{
  auth::AuthEndpoints,
  availability_rules::AvailabilityRulesEndpoints,
  booking_settings::BookingSettingsEndpoints,
  calendar_operations::{BatchOperation, CalendarOperationEndpoints},
  calendars::CalendarEndpoints,
  listing_descriptions::ListingDescriptionEndpoints,
  listing_photos::ListingPhotoEndpoints,
  listing_rooms::ListingRoomEndpoints,
  listings::ListingEndpoints,
  messages::MessageEndpoints,
  pricing_settings::PricingSettingsEndpoints,
  reservation_alterations::ReservationAlterationEndpoints,
  reservations::ReservationEndpoints,
  rule_group_timelines::RuleGroupTimelineEndpoints,
  seasonal_rules::SeasonalRuleEndpoints,
  threads::ThreadEndpoints,
};
