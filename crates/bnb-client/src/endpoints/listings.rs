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

//! Listing endpoints

use super::{impl_endpoint_base, body_of, entities_from, entity_from, fill_from, paging_from, EndpointBase};
use crate::transport::{query_from_payload, Transport};
use bnb_core::{Entity, Error, Result};
use bnb_models::{GetAllListingsParameters, Listing, ListingPage, Page};
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "listings/";

/// Create, read, update and delete listings
pub struct ListingEndpoints {
  transport: Arc<Transport>,
}

impl ListingEndpoints {
  /// Create a new listing endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Create a listing and fill `listing` with the stored version (id included)
  #[instrument(skip_all)]
  pub async fn create_listing(&self, listing: &mut Listing, token: &str) -> Result<()> {
    let body = self.transport().post(ENDPOINT, Some(token), &[], &body_of(listing)).await?;
    fill_from(listing, body, "listing")
  }

  /// Get one page of a user's listings
  ///
  /// # Arguments
  ///
  /// * `user_id` - Airbnb account id of the host
  /// * `parameters` - Filters and paging; the API defaults apply when `None`
  #[instrument(skip(self, token, parameters))]
  pub async fn get_users_listings(
    &self,
    user_id: i64,
    token: &str,
    parameters: Option<&GetAllListingsParameters>,
  ) -> Result<ListingPage> {
    let mut query = vec![("user_id".to_string(), user_id.to_string())];
    if let Some(parameters) = parameters {
      query.extend(query_from_payload(&parameters.export_payload(true)));
    }

    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    let paging = paging_from(&body)?;
    Ok(Page { items: entities_from(body, "listings")?, paging })
  }

  /// Get a listing by id
  #[instrument(skip(self, token))]
  pub async fn get_listing(&self, listing_id: i64, token: &str) -> Result<Listing> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[]).await?;
    entity_from(body, "listing")
  }

  /// Send the listing's changes and fill it with the server's version
  #[instrument(skip_all)]
  pub async fn update_listing(&self, listing: &mut Listing, token: &str) -> Result<()> {
    let id = listing
      .id()
      .ok_or_else(|| Error::InvalidShape { field: "id".to_string(), expected: "a stored listing id" })?;
    let path = format!("{}{}", ENDPOINT, id);
    let body = self.transport().put(&path, Some(token), &[], &body_of(listing)).await?;
    fill_from(listing, body, "listing")
  }

  /// Delete a listing
  #[instrument(skip(self, token))]
  pub async fn delete_listing(&self, listing_id: i64, token: &str) -> Result<()> {
    self.transport().delete(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[]).await?;
    Ok(())
  }
}

impl_endpoint_base!(ListingEndpoints);
