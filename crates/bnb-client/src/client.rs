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

//! Client facade over every endpoint family

use crate::endpoints::{
  auth::AuthEndpoints, availability_rules::AvailabilityRulesEndpoints,
  booking_settings::BookingSettingsEndpoints, calendar_operations::CalendarOperationEndpoints,
  calendars::CalendarEndpoints, listing_descriptions::ListingDescriptionEndpoints,
  listing_photos::ListingPhotoEndpoints, listing_rooms::ListingRoomEndpoints, listings::ListingEndpoints,
  messages::MessageEndpoints, pricing_settings::PricingSettingsEndpoints,
  reservation_alterations::ReservationAlterationEndpoints, reservations::ReservationEndpoints,
  rule_group_timelines::RuleGroupTimelineEndpoints, seasonal_rules::SeasonalRuleEndpoints,
  threads::ThreadEndpoints,
};
use crate::transport::Transport;
use bnb_core::{Config, Result};
use std::sync::Arc;
use tracing::info;

/// Main Airbnb API client
///
/// Provides access to every resource family through its endpoint struct.
/// All families share one transport, so the HTTP connection pool and the
/// application credentials are set up once.
///
/// # Examples
///
/// ```ignore
/// use bnb_client::BnbClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BnbClient::from_env()?;
///     let token = std::env::var("AIRBNB_USER_TOKEN")?;
///
///     let page = client.listings().get_users_listings(12345, &token, None).await?;
///     for listing in &page.items {
///         println!("{:?} {:?}", listing.id(), listing.name());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BnbClient {
  transport: Arc<Transport>,
}

impl BnbClient {
  /// Create a new Airbnb API client
  ///
  /// # Arguments
  ///
  /// * `config` - Application credentials and transport settings
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Transport::new(&config)?;
    info!(base_url = %transport.base_url(), "Airbnb client ready");
    Ok(Self { transport: Arc::new(transport) })
  }

  /// Create a client from `AIRBNB_*` environment variables (and `.env`)
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Create a client over an existing transport
  pub fn with_transport(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// The shared transport
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }

  /// OAuth2 code exchange and token lifecycle
  pub fn auth(&self) -> AuthEndpoints {
    AuthEndpoints::new(self.transport.clone())
  }

  /// Listing endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use bnb_client::BnbClient;
  /// # let client = BnbClient::from_env().unwrap();
  /// let listing = client.listings().get_listing(42, "user-token").await?;
  /// # Ok::<(), bnb_core::Error>(())
  /// ```
  pub fn listings(&self) -> ListingEndpoints {
    ListingEndpoints::new(self.transport.clone())
  }

  /// Listing photo endpoints
  pub fn listing_photos(&self) -> ListingPhotoEndpoints {
    ListingPhotoEndpoints::new(self.transport.clone())
  }

  /// Listing room endpoints
  pub fn listing_rooms(&self) -> ListingRoomEndpoints {
    ListingRoomEndpoints::new(self.transport.clone())
  }

  /// Localized listing description endpoints
  pub fn listing_descriptions(&self) -> ListingDescriptionEndpoints {
    ListingDescriptionEndpoints::new(self.transport.clone())
  }

  /// Pricing settings endpoints
  pub fn pricing_settings(&self) -> PricingSettingsEndpoints {
    PricingSettingsEndpoints::new(self.transport.clone())
  }

  /// Availability rules endpoints
  pub fn availability_rules(&self) -> AvailabilityRulesEndpoints {
    AvailabilityRulesEndpoints::new(self.transport.clone())
  }

  /// Booking settings endpoints
  pub fn booking_settings(&self) -> BookingSettingsEndpoints {
    BookingSettingsEndpoints::new(self.transport.clone())
  }

  /// Calendar endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use bnb_client::{BnbClient, CalendarOperation};
  /// # use chrono::NaiveDate;
  /// # let client = BnbClient::from_env().unwrap();
  /// let start = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
  /// let end = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap();
  /// let days = client.calendars().update_calendar(42, start, end, &CalendarOperation::new(250), "user-token").await?;
  /// # Ok::<(), bnb_core::Error>(())
  /// ```
  pub fn calendars(&self) -> CalendarEndpoints {
    CalendarEndpoints::new(self.transport.clone())
  }

  /// Batch calendar operation endpoints
  pub fn calendar_operations(&self) -> CalendarOperationEndpoints {
    CalendarOperationEndpoints::new(self.transport.clone())
  }

  /// Seasonal rule set endpoints
  pub fn seasonal_rules(&self) -> SeasonalRuleEndpoints {
    SeasonalRuleEndpoints::new(self.transport.clone())
  }

  /// Seasonal rule set timeline endpoints
  pub fn rule_group_timelines(&self) -> RuleGroupTimelineEndpoints {
    RuleGroupTimelineEndpoints::new(self.transport.clone())
  }

  /// Reservation endpoints
  pub fn reservations(&self) -> ReservationEndpoints {
    ReservationEndpoints::new(self.transport.clone())
  }

  /// Reservation alteration endpoints
  pub fn reservation_alterations(&self) -> ReservationAlterationEndpoints {
    ReservationAlterationEndpoints::new(self.transport.clone())
  }

  /// Message endpoints
  pub fn messages(&self) -> MessageEndpoints {
    MessageEndpoints::new(self.transport.clone())
  }

  /// Thread endpoints
  pub fn threads(&self) -> ThreadEndpoints {
    ThreadEndpoints::new(self.transport.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::EndpointBase;
  use bnb_core::Error;

  #[test]
  fn test_client_creation() {
    let config = Config::with_credentials("client", "secret").with_base_url("https://api.example.test/v2");
    let client = BnbClient::new(config).expect("Failed to create client");

    assert_eq!(client.transport().base_url().as_str(), "https://api.example.test/v2/");
    assert!(Arc::ptr_eq(client.listings().transport(), client.threads().transport()));
  }

  #[test]
  fn test_missing_credentials_are_rejected() {
    let result = BnbClient::new(Config::with_credentials("", "secret"));
    assert!(matches!(result, Err(Error::Credentials(_))));
  }

  #[test]
  fn test_debug_hides_secret() {
    let client = BnbClient::new(Config::with_credentials("client", "very-secret")).unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains("client"));
    assert!(!debug.contains("very-secret"));
  }
}
