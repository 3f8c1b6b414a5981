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

//! Listing description endpoints

use super::{impl_endpoint_base, body_of, entities_from, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Entity, Result};
use bnb_models::ListingDescription;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "listing_descriptions/";

/// Locale used when a caller does not name one
pub const DEFAULT_LOCALE: &str = "en";

/// Localized listing texts, one description per locale
pub struct ListingDescriptionEndpoints {
  transport: Arc<Transport>,
}

impl ListingDescriptionEndpoints {
  /// Create a new listing description endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Create or replace the description for one locale and fill it with the stored version
  #[instrument(skip(self, description, token))]
  pub async fn create_listing_description(
    &self,
    description: &mut ListingDescription,
    token: &str,
    listing_id: i64,
    locale: &str,
  ) -> Result<()> {
    let path = format!("{}{}/{}", ENDPOINT, listing_id, locale);
    let body = self.transport().put(&path, Some(token), &[], &body_of(description)).await?;
    fill_from(description, body, "listing_description")
  }

  /// Replace every description of a listing at once
  #[instrument(skip(self, descriptions, token), fields(count = descriptions.len()))]
  pub async fn set_all_listing_descriptions(
    &self,
    descriptions: &[ListingDescription],
    token: &str,
    listing_id: i64,
  ) -> Result<Vec<ListingDescription>> {
    let exported: Vec<Value> =
      descriptions.iter().map(|d| Value::Object(d.export_payload(true))).collect();
    let request = json!({ "listing_descriptions": exported });

    let body =
      self.transport().put(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[], &request).await?;
    entities_from(body, "listing_descriptions")
  }

  /// Get the descriptions of a listing in every locale
  #[instrument(skip(self, token))]
  pub async fn get_all_listing_descriptions(
    &self,
    listing_id: i64,
    token: &str,
  ) -> Result<Vec<ListingDescription>> {
    let query = vec![("listing_id".to_string(), listing_id.to_string())];
    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    entities_from(body, "listing_descriptions")
  }

  /// Get the description of a listing in one locale
  #[instrument(skip(self, token))]
  pub async fn get_listing_description(
    &self,
    listing_id: i64,
    token: &str,
    locale: &str,
  ) -> Result<ListingDescription> {
    let path = format!("{}{}/{}", ENDPOINT, listing_id, locale);
    let body = self.transport().get(&path, Some(token), &[]).await?;
    entity_from(body, "listing_description")
  }

  /// Delete the description of a listing in one locale
  #[instrument(skip(self, token))]
  pub async fn delete_listing_description(&self, listing_id: i64, token: &str, locale: &str) -> Result<()> {
    let path = format!("{}{}/{}", ENDPOINT, listing_id, locale);
    self.transport().delete(&path, Some(token), &[]).await?;
    Ok(())
  }
}

impl_endpoint_base!(ListingDescriptionEndpoints);
