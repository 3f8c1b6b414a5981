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

//! Listing room endpoints

use super::{impl_endpoint_base, body_of, entities_from, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Error, Result};
use bnb_models::ListingRoom;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "listing_rooms/";

/// Describe the rooms (beds, amenities) of a listing
pub struct ListingRoomEndpoints {
  transport: Arc<Transport>,
}

// Stored rooms live under listing_rooms/{listing_id}/{room_id}
fn room_path(room: &ListingRoom) -> Result<String> {
  let listing_id = room.listing_id().ok_or_else(|| Error::InvalidShape {
    field: "listing_id".to_string(),
    expected: "a listing id",
  })?;
  let id = room
    .id()
    .ok_or_else(|| Error::InvalidShape { field: "id".to_string(), expected: "a stored room id" })?;
  Ok(format!("{}{}/{}", ENDPOINT, listing_id, id))
}

impl ListingRoomEndpoints {
  /// Create a new listing room endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Describe a new room and fill it with the stored version
  #[instrument(skip_all)]
  pub async fn describe_new_room(&self, room: &mut ListingRoom, token: &str) -> Result<()> {
    let body = self.transport().post(ENDPOINT, Some(token), &[], &body_of(room)).await?;
    fill_from(room, body, "listing_room")
  }

  /// Get every room of a listing
  #[instrument(skip(self, token))]
  pub async fn get_all_listing_rooms(&self, listing_id: &str, token: &str) -> Result<Vec<ListingRoom>> {
    let query = vec![("listing_id".to_string(), listing_id.to_string())];
    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    entities_from(body, "listing_rooms")
  }

  /// Send a room's changes and fill it with the server's version
  #[instrument(skip_all)]
  pub async fn update_room(&self, room: &mut ListingRoom, token: &str) -> Result<()> {
    let path = room_path(room)?;
    let body = self.transport().put(&path, Some(token), &[], &body_of(room)).await?;
    fill_from(room, body, "listing_room")
  }

  /// Get one room of a listing
  #[instrument(skip(self, token))]
  pub async fn get_room(&self, room_id: i64, listing_id: i64, token: &str) -> Result<ListingRoom> {
    let path = format!("{}{}/{}", ENDPOINT, listing_id, room_id);
    let body = self.transport().get(&path, Some(token), &[]).await?;
    entity_from(body, "listing_room")
  }

  /// Delete a stored room
  #[instrument(skip_all)]
  pub async fn delete_room(&self, room: &ListingRoom, token: &str) -> Result<()> {
    self.transport().delete(&room_path(room)?, Some(token), &[]).await?;
    Ok(())
  }
}

impl_endpoint_base!(ListingRoomEndpoints);
