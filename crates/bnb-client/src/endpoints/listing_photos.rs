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

//! Listing photo endpoints

use super::{impl_endpoint_base, body_of, entities_from, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Error, Result};
use bnb_models::ListingPhoto;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "listing_photos/";

/// Upload, reorder and remove listing photos
pub struct ListingPhotoEndpoints {
  transport: Arc<Transport>,
}

fn photo_path(photo: &ListingPhoto) -> Result<String> {
  let id = photo
    .id()
    .ok_or_else(|| Error::InvalidShape { field: "id".to_string(), expected: "a stored photo id" })?;
  Ok(format!("{}{}", ENDPOINT, id))
}

impl ListingPhotoEndpoints {
  /// Create a new listing photo endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Upload a photo and fill it with the stored version
  #[instrument(skip_all)]
  pub async fn upload_photo(&self, photo: &mut ListingPhoto, token: &str) -> Result<()> {
    let body = self.transport().post(ENDPOINT, Some(token), &[], &body_of(photo)).await?;
    fill_from(photo, body, "listing_photo")
  }

  /// Update the caption and sort order of a stored photo
  #[instrument(skip_all)]
  pub async fn update_photo(&self, photo: &mut ListingPhoto, token: &str) -> Result<()> {
    let path = photo_path(photo)?;
    let update = Value::Object(photo.update_payload());
    let body = self.transport().put(&path, Some(token), &[], &update).await?;
    fill_from(photo, body, "listing_photo")
  }

  /// Get every photo of a listing
  #[instrument(skip(self, token))]
  pub async fn get_all_listing_photos(&self, listing_id: &str, token: &str) -> Result<Vec<ListingPhoto>> {
    let query = vec![("listing_id".to_string(), listing_id.to_string())];
    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    entities_from(body, "listing_photos")
  }

  /// Get a photo by id
  #[instrument(skip(self, token))]
  pub async fn get_listing_photo(&self, photo_id: &str, token: &str) -> Result<ListingPhoto> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, photo_id), Some(token), &[]).await?;
    entity_from(body, "listing_photo")
  }

  /// Delete a stored photo
  #[instrument(skip_all)]
  pub async fn delete_listing_photo(&self, photo: &ListingPhoto, token: &str) -> Result<()> {
    self.transport().delete(&photo_path(photo)?, Some(token), &[]).await?;
    Ok(())
  }
}

impl_endpoint_base!(ListingPhotoEndpoints);
