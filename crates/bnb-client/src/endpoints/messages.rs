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

//! Message endpoints

use super::{impl_endpoint_base, body_of, entity_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::Result;
use bnb_models::{Message, ThreadMessage};
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "messages/";

/// Posting messages into guest threads
pub struct MessageEndpoints {
  transport: Arc<Transport>,
}

impl MessageEndpoints {
  /// Create a new message endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Send a message and return it as stored in its thread
  #[instrument(skip_all)]
  pub async fn send_message(&self, message: &Message, token: &str) -> Result<ThreadMessage> {
    let body = self.transport().post(ENDPOINT, Some(token), &[], &body_of(message)).await?;
    entity_from(body, "message")
  }
}

impl_endpoint_base!(MessageEndpoints);
