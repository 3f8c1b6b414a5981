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

//! Calendar endpoints

use super::{impl_endpoint_base, body_of, EndpointBase};
use crate::transport::Transport;
use bnb_core::entity::create_all;
use bnb_core::{Error, Result};
use bnb_models::{CalendarDay, CalendarOperation, CALENDAR_DATE_FORMAT};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

const ENDPOINT: &str = "calendars/";

/// Day-by-day price and availability of a listing
pub struct CalendarEndpoints {
  transport: Arc<Transport>,
}

/// Path of a listing calendar between two dates, both inclusive
fn calendar_path(listing_id: i64, start: NaiveDate, end: NaiveDate) -> Result<String> {
  if end < start {
    return Err(Error::InvalidShape { field: "end".to_string(), expected: "a date on or after start" });
  }
  Ok(format!(
    "{}{}/{}/{}",
    ENDPOINT,
    listing_id,
    start.format(CALENDAR_DATE_FORMAT),
    end.format(CALENDAR_DATE_FORMAT)
  ))
}

/// Days under `calendar.days`; a response without days is an empty calendar
fn days_from(body: &Value) -> Result<Vec<CalendarDay>> {
  match body.get("calendar").and_then(|calendar| calendar.get("days")) {
    Some(days) if !days.is_null() => create_all("days", days),
    _ => {
      debug!("calendar response carried no days");
      Ok(Vec::new())
    }
  }
}

impl CalendarEndpoints {
  /// Create a new calendar endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the calendar days of a listing
  ///
  /// # Arguments
  ///
  /// * `start` - First day of the range
  /// * `end` - Last day of the range
  #[instrument(skip(self, token))]
  pub async fn get_days(
    &self,
    listing_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    token: &str,
  ) -> Result<Vec<CalendarDay>> {
    let path = calendar_path(listing_id, start, end)?;
    let body = self.transport().get(&path, Some(token), &[]).await?;
    days_from(&body)
  }

  /// Apply one operation to every day of a range and return the updated days
  #[instrument(skip(self, operation, token))]
  pub async fn update_calendar(
    &self,
    listing_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    operation: &CalendarOperation,
    token: &str,
  ) -> Result<Vec<CalendarDay>> {
    let path = calendar_path(listing_id, start, end)?;
    let body = self.transport().put(&path, Some(token), &[], &body_of(operation)).await?;
    days_from(&body)
  }
}

impl_endpoint_base!(CalendarEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{setup, TOKEN};
  use bnb_models::availability_type;
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, ResponseTemplate};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_calendar_path() {
    assert_eq!(calendar_path(7, date(2024, 3, 1), date(2024, 3, 9)).unwrap(), "calendars/7/2024-03-01/2024-03-09");
    assert!(matches!(calendar_path(7, date(2024, 3, 9), date(2024, 3, 1)), Err(Error::InvalidShape { .. })));
  }

  #[test]
  fn test_days_from_absent_calendar() {
    assert!(days_from(&json!({ "calendar": {} })).unwrap().is_empty());
    assert!(days_from(&json!({})).unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_get_days() {
    let (server, transport) = setup().await;
    Mock::given(method("GET"))
      .and(path("/v2/calendars/7/2024-03-01/2024-03-02"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "calendar": {
          "listing_id": 7,
          "days": [
            { "date": "2024-03-01", "availability": "available", "daily_price": 90 },
            { "date": "2024-03-02", "availability": "unavailable", "daily_price": 90 }
          ]
        }
      })))
      .mount(&server)
      .await;

    let days =
      CalendarEndpoints::new(transport).get_days(7, date(2024, 3, 1), date(2024, 3, 2), TOKEN).await.unwrap();

    assert_eq!(days.len(), 2);
    assert!(days[0].is_available());
    assert!(!days[1].is_available());
    assert_eq!(days[1].day().unwrap(), date(2024, 3, 2));
  }

  #[tokio::test]
  async fn test_update_calendar_sends_operation() {
    let (server, transport) = setup().await;
    Mock::given(method("PUT"))
      .and(path("/v2/calendars/7/2024-03-01/2024-03-01"))
      .and(body_json(json!({
        "daily_price": 150,
        "availability": "unavailable",
        "closed_to_arrival": false,
        "closed_to_departure": false
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "calendar": { "days": [{ "date": "2024-03-01", "availability": "unavailable", "daily_price": 150 }] }
      })))
      .expect(1)
      .mount(&server)
      .await;

    let mut operation = CalendarOperation::new(150);
    operation.set_availability(availability_type::UNAVAILABLE);
    let days = CalendarEndpoints::new(transport)
      .update_calendar(7, date(2024, 3, 1), date(2024, 3, 1), &operation, TOKEN)
      .await
      .unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].daily_price(), Some(150));
  }
}
