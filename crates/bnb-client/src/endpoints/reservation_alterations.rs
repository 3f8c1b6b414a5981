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

//! Reservation alteration endpoints

use super::{impl_endpoint_base, entities_from, entity_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Error, Result};
use bnb_models::ReservationAlteration;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "reservation_alterations/";

/// Statuses a host may set on a pending alteration request
pub const ALLOWED_STATUSES_FOR_UPDATE: [&str; 3] = [
  ReservationAlteration::STATUS_ACCEPTED,
  ReservationAlteration::STATUS_CANCELED,
  ReservationAlteration::STATUS_DECLINED,
];

/// Changes to dates, guests or price requested on existing reservations
pub struct ReservationAlterationEndpoints {
  transport: Arc<Transport>,
}

impl ReservationAlterationEndpoints {
  /// Create a new reservation alteration endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List the alterations of one reservation
  #[instrument(skip(self, token))]
  pub async fn get_all_alterations(
    &self,
    confirmation_code: &str,
    token: &str,
  ) -> Result<Vec<ReservationAlteration>> {
    let query = vec![("confirmation_codes[]".to_string(), confirmation_code.to_string())];
    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    entities_from(body, "reservation_alterations")
  }

  /// Get an alteration by id
  #[instrument(skip(self, token))]
  pub async fn get_alteration(&self, alteration_id: i64, token: &str) -> Result<ReservationAlteration> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, alteration_id), Some(token), &[]).await?;
    entity_from(body, "reservation_alteration")
  }

  /// Accept, cancel or decline a pending alteration request
  ///
  /// # Arguments
  ///
  /// * `status` - One of [`ALLOWED_STATUSES_FOR_UPDATE`]; anything else fails before sending
  #[instrument(skip(self, token))]
  pub async fn update_pending_request(&self, alteration_id: i64, status: &str, token: &str) -> Result<()> {
    if !ALLOWED_STATUSES_FOR_UPDATE.contains(&status) {
      return Err(Error::InvalidShape { field: "status".to_string(), expected: "ACCEPTED, CANCELED or DECLINED" });
    }
    let path = format!("{}{}", ENDPOINT, alteration_id);
    self.transport().put(&path, Some(token), &[], &json!({ "status": status })).await?;
    Ok(())
  }
}

impl_endpoint_base!(ReservationAlterationEndpoints);
