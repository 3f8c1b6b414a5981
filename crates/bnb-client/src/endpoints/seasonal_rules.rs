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

//! Seasonal rule set endpoints

use super::{impl_endpoint_base, body_of, entities_from, entity_from, fill_from, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Error, Result};
use bnb_models::SeasonalRuleGroup;
use std::sync::Arc;
use tracing::instrument;

const ENDPOINT: &str = "seasonal_rule_sets/";

/// Reusable pricing and availability rule groups of a host
pub struct SeasonalRuleEndpoints {
  transport: Arc<Transport>,
}

impl SeasonalRuleEndpoints {
  /// Create a new seasonal rule endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Create a rule group and fill it with the server's version
  #[instrument(skip(self, group, token))]
  pub async fn create_rule_group(&self, group: &mut SeasonalRuleGroup, token: &str) -> Result<()> {
    let body = self.transport().post(ENDPOINT, Some(token), &[], &body_of(group)).await?;
    fill_from(group, body, "seasonal_rule_set")
  }

  /// List every rule group of a host
  #[instrument(skip(self, token))]
  pub async fn get_all_rule_groups(&self, user_id: i64, token: &str) -> Result<Vec<SeasonalRuleGroup>> {
    let query = vec![("user_id".to_string(), user_id.to_string())];
    let body = self.transport().get(ENDPOINT, Some(token), &query).await?;
    entities_from(body, "seasonal_rule_sets")
  }

  /// Get a single rule group
  #[instrument(skip(self, token))]
  pub async fn get_rule_group(&self, rule_group_id: i64, token: &str) -> Result<SeasonalRuleGroup> {
    let body = self.transport().get(&format!("{}{}", ENDPOINT, rule_group_id), Some(token), &[]).await?;
    entity_from(body, "seasonal_rule_set")
  }

  /// Delete a rule group
  #[instrument(skip(self, token))]
  pub async fn delete_rule_group(&self, rule_group_id: i64, token: &str) -> Result<()> {
    self.transport().delete(&format!("{}{}", ENDPOINT, rule_group_id), Some(token), &[]).await?;
    Ok(())
  }

  /// Send local changes of a rule group and fill it with the server's version
  #[instrument(skip(self, group, token), fields(id = group.id()))]
  pub async fn send_changes(&self, group: &mut SeasonalRuleGroup, token: &str) -> Result<()> {
    let id = group
      .id()
      .ok_or_else(|| Error::InvalidShape { field: "id".to_string(), expected: "an id assigned by the server" })?;
    let body = self.transport().put(&format!("{}{}", ENDPOINT, id), Some(token), &[], &body_of(group)).await?;
    fill_from(group, body, "seasonal_rule_set")
  }
}

impl_endpoint_base!(SeasonalRuleEndpoints);
