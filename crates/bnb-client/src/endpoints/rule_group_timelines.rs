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

//! Listing seasonal rule set timeline endpoints

use super::{impl_endpoint_base, body_of, unwrap_envelope, EndpointBase};
use crate::transport::Transport;
use bnb_core::entity::create_all;
use bnb_core::Result;
use bnb_models::RuleGroupTimeline;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "listing_seasonal_rule_set_timelines/";

/// Which seasonal rule groups apply to which dates of a listing
pub struct RuleGroupTimelineEndpoints {
  transport: Arc<Transport>,
}

fn timelines_from(body: Value) -> Result<Vec<RuleGroupTimeline>> {
  let timeline = unwrap_envelope(body, "listing_seasonal_rule_set_timeline")?;
  create_all("rule_group_timeline", &unwrap_envelope(timeline, "rule_group_timeline")?)
}

impl RuleGroupTimelineEndpoints {
  /// Create a new rule group timeline endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the rule group timeline of a listing
  #[instrument(skip(self, token))]
  pub async fn get_all_rule_groups(&self, listing_id: i64, token: &str) -> Result<Vec<RuleGroupTimeline>> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, listing_id), Some(token), &[]).await?;
    timelines_from(body)
  }

  /// Apply a rule group to a date range, or remove it, and return the resulting timeline
  #[instrument(skip(self, timeline, token))]
  pub async fn apply_or_remove_rule_group(
    &self,
    timeline: &RuleGroupTimeline,
    listing_id: i64,
    token: &str,
  ) -> Result<Vec<RuleGroupTimeline>> {
    let path = format!("{}{}", ENDPOINT, listing_id);
    let body = self.transport().put(&path, Some(token), &[], &body_of(timeline)).await?;
    timelines_from(body)
  }
}

impl_endpoint_base!(RuleGroupTimelineEndpoints);
