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

//! Availability rules endpoints

use super::{impl_endpoint_base, body_of, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::Result;
use bnb_models::AvailabilityRules;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "availability_rules/";

/// Stay length, notice and turnover rules of a listing
pub struct AvailabilityRulesEndpoints {
  transport: Arc<Transport>,
}

impl AvailabilityRulesEndpoints {
  /// Create a new availability rules endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the availability rules of a listing
  #[instrument(skip(self, token))]
  pub async fn get_availability_rules(&self, listing_id: i64, token: &str) -> Result<AvailabilityRules> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[]).await?;
    entity_from(body, "availability_rule")
  }

  /// Update availability rules and fill them with the server's version
  #[instrument(skip(self, rules, token))]
  pub async fn update_availability_rules(
    &self,
    listing_id: i64,
    rules: &mut AvailabilityRules,
    token: &str,
  ) -> Result<()> {
    let path = format!("{}{}", ENDPOINT, listing_id);
    let body = self.transport().put(&path, Some(token), &[], &body_of(rules)).await?;
    fill_from(rules, body, "availability_rule")
  }
}

impl_endpoint_base!(AvailabilityRulesEndpoints);
