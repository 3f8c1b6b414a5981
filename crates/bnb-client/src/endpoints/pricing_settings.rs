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

//! Pricing settings endpoints

use super::{impl_endpoint_base, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Entity, RawPayload, Result};
use bnb_models::PricingSettings;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "pricing_settings/";

/// Nightly prices, fees and discounts of a listing
pub struct PricingSettingsEndpoints {
  transport: Arc<Transport>,
}

/// Request body for a pricing update.
///
/// The API refuses the currency together with other price fields, so a
/// currency change is sent on its own and any other update leaves it out.
fn pricing_update_body(settings: &PricingSettings, update_currency: bool) -> Value {
  let mut data = settings.export_payload(true);
  if update_currency {
    let mut only_currency = RawPayload::new();
    if let Some(currency) = data.remove("listing_currency") {
      only_currency.insert("listing_currency".to_string(), currency);
    }
    Value::Object(only_currency)
  } else {
    data.remove("listing_currency");
    Value::Object(data)
  }
}

impl PricingSettingsEndpoints {
  /// Create a new pricing settings endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the pricing settings of a listing
  #[instrument(skip(self, token))]
  pub async fn get_pricing_settings(&self, listing_id: i64, token: &str) -> Result<PricingSettings> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[]).await?;
    entity_from(body, "pricing_setting")
  }

  /// Update pricing settings and fill them with the server's version
  ///
  /// # Arguments
  ///
  /// * `update_currency` - Send only `listing_currency`; otherwise everything but the currency is sent
  #[instrument(skip(self, settings, token))]
  pub async fn update_pricing_settings(
    &self,
    listing_id: i64,
    settings: &mut PricingSettings,
    token: &str,
    update_currency: bool,
  ) -> Result<()> {
    let request = pricing_update_body(settings, update_currency);
    let body =
      self.transport().put(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[], &request).await?;
    fill_from(settings, body, "pricing_setting")
  }
}

impl_endpoint_base!(PricingSettingsEndpoints);
