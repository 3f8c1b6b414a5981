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

//! Batch calendar operations

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use bnb_core::{Entity, Error, Result};
use bnb_models::{CalendarOperation, CALENDAR_DATE_FORMAT};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{instrument, warn};

const ENDPOINT: &str = "calendar_operations_requests/";

/// Lowest nightly price the platform accepts in a calendar operation
pub const MIN_PRICE: i64 = 10;

/// A calendar operation applied to one or more date ranges
#[derive(Debug, Clone)]
pub struct BatchOperation {
  ranges: Vec<(NaiveDate, NaiveDate)>,
  operation: CalendarOperation,
}

impl BatchOperation {
  /// Create a batch operation without any date range
  pub fn new(operation: CalendarOperation) -> Self {
    Self { ranges: Vec::new(), operation }
  }

  /// Add an inclusive date range the operation applies to
  pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
    self.ranges.push((start, end));
    self
  }

  /// The date ranges of this operation
  pub fn ranges(&self) -> &[(NaiveDate, NaiveDate)] {
    &self.ranges
  }

  /// Exported operation with its ranges as `start:end` strings under `dates`
  pub fn to_value(&self) -> Value {
    let mut payload = self.operation.export_payload(true);
    let dates = self
      .ranges
      .iter()
      .map(|(start, end)| {
        Value::String(format!("{}:{}", start.format(CALENDAR_DATE_FORMAT), end.format(CALENDAR_DATE_FORMAT)))
      })
      .collect();
    payload.insert("dates".to_string(), Value::Array(dates));
    Value::Object(payload)
  }

  fn check(&self) -> Result<()> {
    if self.ranges.is_empty() {
      return Err(Error::InvalidShape { field: "dates".to_string(), expected: "at least one date range" });
    }
    if self.ranges.iter().any(|(start, end)| end < start) {
      return Err(Error::InvalidShape { field: "dates".to_string(), expected: "ranges ending on or after their start" });
    }
    match self.operation.daily_price() {
      Some(price) if price >= MIN_PRICE => Ok(()),
      _ => Err(Error::InvalidShape { field: "daily_price".to_string(), expected: "a daily price of at least 10" }),
    }
  }
}

/// Calendar changes over many date ranges in one request
pub struct CalendarOperationEndpoints {
  transport: Arc<Transport>,
}

impl CalendarOperationEndpoints {
  /// Create a new calendar operation endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Send a batch of calendar operations for one listing
  ///
  /// # Arguments
  ///
  /// * `allow_dates_overlap` - Let later operations override earlier ones on shared days
  ///
  /// Returns the `success` flag of the response.
  #[instrument(skip(self, operations, token), fields(operations = operations.len()))]
  pub async fn batch_update(
    &self,
    listing_id: i64,
    operations: &[BatchOperation],
    token: &str,
    allow_dates_overlap: bool,
  ) -> Result<bool> {
    for operation in operations {
      operation.check()?;
    }

    let mut query = Vec::new();
    if allow_dates_overlap {
      query.push(("_allow_dates_overlap".to_string(), "1".to_string()));
    }
    let request = json!({
      "listing_id": listing_id,
      "operations": operations.iter().map(BatchOperation::to_value).collect::<Vec<_>>(),
    });

    let body = self.transport().post(ENDPOINT, Some(token), &query, &request).await?;
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
      warn!(listing_id, "calendar batch was not applied");
    }
    Ok(success)
  }
}

impl_endpoint_base!(CalendarOperationEndpoints);
