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

//! Booking settings endpoints

use super::{impl_endpoint_base, body_of, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::Result;
use bnb_models::BookingSettings;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "booking_settings/";

/// Check-in window, instant booking and house expectations of a listing
pub struct BookingSettingsEndpoints {
  transport: Arc<Transport>,
}

impl BookingSettingsEndpoints {
  /// Create a new booking settings endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the booking settings of a listing
  #[instrument(skip(self, token))]
  pub async fn get_booking_settings(&self, listing_id: i64, token: &str) -> Result<BookingSettings> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[]).await?;
    entity_from(body, "booking_setting")
  }

  /// Update booking settings and fill them with the server's version.
  ///
  /// `NOT_SELECTED` placeholders read from the API are not sent back.
  #[instrument(skip(self, settings, token))]
  pub async fn update_booking_settings(
    &self,
    listing_id: i64,
    settings: &mut BookingSettings,
    token: &str,
  ) -> Result<()> {
    let path = format!("{}{}", ENDPOINT, listing_id);
    let body = self.transport().put(&path, Some(token), &[], &body_of(settings)).await?;
    fill_from(settings, body, "booking_setting")
  }
}

impl_endpoint_base!(BookingSettingsEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{setup, TOKEN};
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, ResponseTemplate};

  #[tokio::test]
  async fn test_round_trip_drops_placeholders() {
    let (server, transport) = setup().await;
    Mock::given(method("GET"))
      .and(path("/v2/booking_settings/12"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "booking_setting": {
          "listing_id": 12,
          "cancellation_policy_category": "strict",
          "check_in_time_start": "NOT_SELECTED",
          "check_in_time_end": "NOT_SELECTED",
          "check_out_time": 11,
          "instant_booking_allowed_category": "everyone",
          "guest_controls": { "allows_pets_as_host": null }
        }
      })))
      .mount(&server)
      .await;
    Mock::given(method("PUT"))
      .and(path("/v2/booking_settings/12"))
      .and(body_json(json!({ "check_out_time": 10, "instant_booking_allowed_category": "everyone" })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "booking_setting": { "listing_id": 12, "check_out_time": 10 }
      })))
      .expect(1)
      .mount(&server)
      .await;

    let endpoints = BookingSettingsEndpoints::new(transport);
    let mut settings = endpoints.get_booking_settings(12, TOKEN).await.unwrap();
    settings.set_check_out_time(10);
    endpoints.update_booking_settings(12, &mut settings, TOKEN).await.unwrap();

    assert_eq!(settings.check_out_time(), Some(10));
  }
}
