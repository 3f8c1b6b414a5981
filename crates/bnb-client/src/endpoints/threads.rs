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

//! Thread endpoints

use super::{impl_endpoint_base, entities_from, entity_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::Result;
use bnb_models::Thread;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "threads/";

/// Conversations between hosts, guests and cohosts
pub struct ThreadEndpoints {
  transport: Arc<Transport>,
}

impl ThreadEndpoints {
  /// Create a new thread endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List the threads of the token's user
  #[instrument(skip_all)]
  pub async fn get_all_threads(&self, token: &str) -> Result<Vec<Thread>> {
    let body = self.transport().get(ENDPOINT, Some(token), &[]).await?;
    entities_from(body, "threads")
  }

  /// Get a thread with its attachment, users and messages
  #[instrument(skip(self, token))]
  pub async fn get_thread_by_id(&self, thread_id: i64, token: &str) -> Result<Thread> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, thread_id), Some(token), &[]).await?;
    entity_from(body, "thread")
  }
}

impl_endpoint_base!(ThreadEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{setup, TOKEN};
  use bnb_models::{ThreadAttachment, ThreadRole};
  use serde_json::json;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, ResponseTemplate};

  #[tokio::test]
  async fn test_get_thread_by_id_builds_graph() {
    let (server, transport) = setup().await;
    Mock::given(method("GET"))
      .and(path("/v2/threads/9001"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "thread": {
          "id": 9001,
          "id_str": "9001",
          "business_purpose": "booking_direct_thread",
          "attachment": {
            "type": "Reservation",
            "status": "accepted",
            "booking_details": {
              "listing_id_str": "12",
              "checkin_date": "2024-05-01",
              "checkout_date": "2024-05-04"
            },
            "roles": [{ "role": "owner", "user_ids": [12] }, { "role": "guest", "user_ids": [34] }]
          },
          "users": [{ "id": 12, "first_name": "Ana" }, { "id": 34, "first_name": "Ben" }],
          "messages": [
            { "id_str": "1", "message": "Hi", "user_id": 34 },
            { "id_str": "2", "message": "Hello!", "user_id": 12 }
          ]
        }
      })))
      .mount(&server)
      .await;

    let thread = ThreadEndpoints::new(transport).get_thread_by_id(9001, TOKEN).await.unwrap();

    assert_eq!(thread.business_purpose(), Some(Thread::BOOKING_DIRECT_THREAD));
    let attachment = thread.attachment().unwrap();
    assert_eq!(attachment.kind(), Some(ThreadAttachment::RESERVATION));
    assert!(attachment.booking_details().is_some());
    let roles: Vec<&ThreadRole> = attachment.roles().collect();
    assert_eq!(roles[1].user_id_list(), vec![34]);
    assert_eq!(thread.users().count(), 2);
    assert_eq!(thread.messages().map(|m| m.message().unwrap()).collect::<Vec<_>>(), vec!["Hi", "Hello!"]);
  }

  #[tokio::test]
  async fn test_get_all_threads() {
    let (server, transport) = setup().await;
    Mock::given(method("GET"))
      .and(path("/v2/threads/"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "threads": [{ "id": 1 }, { "id": 2, "id_str": "2" }]
      })))
      .mount(&server)
      .await;

    let threads = ThreadEndpoints::new(transport).get_all_threads(TOKEN).await.unwrap();
    assert_eq!(threads.iter().map(|t| t.id_str().unwrap()).collect::<Vec<_>>(), vec!["1", "2"]);
  }
}
