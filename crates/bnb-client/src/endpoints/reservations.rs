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

//! Reservation endpoints

use super::{impl_endpoint_base, body_of, entities_from, entity_from, paging_from, EndpointBase};
use crate::transport::{query_from_payload, Transport};
use bnb_core::{Entity, Result};
use bnb_models::{
  AcceptOrDenyPendingReservationRequestParameters, CancelActiveReservationParameters, Page, Reservation,
  ReservationPage, RetrieveAllReservationsParameters,
};
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "reservations/";

/// Guest bookings of a host's listings
pub struct ReservationEndpoints {
  transport: Arc<Transport>,
}

impl ReservationEndpoints {
  /// Create a new reservation endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get one page of a host's reservations
  #[instrument(skip(self, parameters, token), fields(host_id = parameters.host_id()))]
  pub async fn retrieve_all(
    &self,
    parameters: &RetrieveAllReservationsParameters,
    token: &str,
  ) -> Result<ReservationPage> {
    let query = query_from_payload(&parameters.export_payload(true));
    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    let paging = paging_from(&body)?;
    Ok(Page { items: entities_from(body, "reservations")?, paging })
  }

  /// Accept or deny a pending booking request
  ///
  /// # Arguments
  ///
  /// * `confirmation_code` - Confirmation code of the pending reservation
  /// * `parameters` - The host's answer
  #[instrument(skip(self, parameters, token))]
  pub async fn accept_or_deny_pending_request(
    &self,
    confirmation_code: &str,
    parameters: &AcceptOrDenyPendingReservationRequestParameters,
    token: &str,
  ) -> Result<Reservation> {
    let path = format!("{}{}", ENDPOINT, confirmation_code);
    let body = self.transport().put(&path, Some(token), &[], &body_of(parameters)).await?;
    entity_from(body, "reservation")
  }

  /// Get a reservation by confirmation code
  #[instrument(skip(self, token))]
  pub async fn get_reservation(&self, confirmation_code: &str, token: &str) -> Result<Reservation> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, confirmation_code), Some(token), &[]).await?;
    entity_from(body, "reservation")
  }

  /// Cancel an accepted reservation
  #[instrument(skip(self, parameters, token))]
  pub async fn cancel_active_reservation(
    &self,
    confirmation_code: &str,
    parameters: &CancelActiveReservationParameters,
    token: &str,
  ) -> Result<()> {
    let path = format!("{}{}", ENDPOINT, confirmation_code);
    self.transport().put(&path, Some(token), &[], &body_of(parameters)).await?;
    Ok(())
  }
}

impl_endpoint_base!(ReservationEndpoints);
