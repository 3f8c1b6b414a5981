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

//! Calendar days and the operations that change them

use bnb_core::entity::{required_i64, required_str};
use bnb_core::{field_accessors, Error, Literal, RawPayload, Record, Result, Schema};
use chrono::NaiveDate;

/// Date format used in calendar paths and payloads
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Availability values a calendar day can carry
pub mod availability_type {
  pub const AVAILABLE: &str = "available";
  pub const UNAVAILABLE: &str = "unavailable";
  pub const DEFAULT: &str = "default";
}

/// Parse a `YYYY-MM-DD` field value; an unset field is an `InvalidShape`
pub(crate) fn parse_date(field: &str, value: Option<&str>) -> Result<NaiveDate> {
  let value =
    value.ok_or_else(|| Error::InvalidShape { field: field.to_string(), expected: "a YYYY-MM-DD string" })?;
  Ok(NaiveDate::parse_from_str(value, CALENDAR_DATE_FORMAT)?)
}

static CALENDAR_OPERATION_SCHEMA: Schema = Schema {
  entity: "CalendarOperation",
  fields: &["daily_price", "min_nights", "max_nights", "notes"],
  defaults: &[
    ("availability", Literal::Str(availability_type::DEFAULT)),
    ("closed_to_arrival", Literal::Bool(false)),
    ("closed_to_departure", Literal::Bool(false)),
  ],
  required: &["daily_price"],
  ..Schema::EMPTY
};

/// Price and availability change applied to a range of days
#[derive(Debug, Clone)]
pub struct CalendarOperation {
  record: Record,
}

impl CalendarOperation {
  pub fn new(daily_price: i64) -> Self {
    let mut record = Record::new(&CALENDAR_OPERATION_SCHEMA);
    record.set("daily_price", daily_price);
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(required_i64(raw, CALENDAR_OPERATION_SCHEMA.entity, "daily_price")?))
  }
}

impl_entity!(CalendarOperation, CALENDAR_OPERATION_SCHEMA);

field_accessors!(CalendarOperation {
  daily_price: int,
  availability: str,
  min_nights: int,
  max_nights: int,
  closed_to_arrival: bool,
  closed_to_departure: bool,
  notes: str,
});

static CALENDAR_DAY_SCHEMA: Schema = Schema {
  entity: "CalendarDay",
  fields: &[
    "date",
    "availability",
    "daily_price",
    "min_nights",
    "max_nights",
    "closed_to_arrival",
    "closed_to_departure",
    "notes",
    "available_count",
  ],
  required: &["date"],
  ..Schema::EMPTY
};

/// One day of a listing calendar as returned by the API
#[derive(Debug, Clone)]
pub struct CalendarDay {
  record: Record,
}

impl CalendarDay {
  pub fn new(date: NaiveDate) -> Self {
    let mut record = Record::new(&CALENDAR_DAY_SCHEMA);
    record.set("date", date.format(CALENDAR_DATE_FORMAT).to_string());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let date = required_str(raw, CALENDAR_DAY_SCHEMA.entity, "date")?;
    let mut record = Record::new(&CALENDAR_DAY_SCHEMA);
    record.set("date", date);
    Ok(Self { record })
  }

  /// The `date` field parsed as a calendar date
  pub fn day(&self) -> Result<NaiveDate> {
    parse_date("date", self.date())
  }

  pub fn is_available(&self) -> bool {
    self.availability() == Some(availability_type::AVAILABLE)
  }
}

impl_entity!(CalendarDay, CALENDAR_DAY_SCHEMA);

field_accessors!(CalendarDay {
  date: str,
  availability: str,
  daily_price: int,
  min_nights: int,
  max_nights: int,
  closed_to_arrival: bool,
  closed_to_departure: bool,
  notes: str,
  available_count: int,
});

#[cfg(test)]
mod tests {
  use super::*;
  use bnb_core::test_utils::payload;
  use bnb_core::Entity;
  use serde_json::json;

  #[test]
  fn test_operation_defaults() {
    let operation = CalendarOperation::new(120);
    assert_eq!(
      operation.export_payload(true),
      payload(json!({
        "daily_price": 120,
        "availability": "default",
        "closed_to_arrival": false,
        "closed_to_departure": false
      }))
    );
  }

  #[test]
  fn test_operation_keeps_nulls_without_suppression() {
    let mut operation = CalendarOperation::new(99);
    operation.set_availability(availability_type::UNAVAILABLE).set_notes("maintenance");

    let exported = operation.export_payload(false);
    assert_eq!(exported["availability"], json!("unavailable"));
    assert_eq!(exported["min_nights"], serde_json::Value::Null);
    assert_eq!(exported.len(), 7);
  }

  #[test]
  fn test_operation_rejects_text_price() {
    let result = CalendarOperation::create_from_payload(&payload(json!({ "daily_price": "cheap" })));
    assert!(matches!(result, Err(Error::InvalidShape { .. })));
  }

  #[test]
  fn test_calendar_day_parses_date() {
    let day = CalendarDay::create_from_payload(&payload(json!({
      "date": "2024-02-29",
      "availability": "available",
      "daily_price": 180,
      "available_count": 1
    })))
    .unwrap();

    assert_eq!(day.day().unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert!(day.is_available());
    assert_eq!(day.daily_price(), Some(180));
  }

  #[test]
  fn test_calendar_day_bad_date() {
    let day = CalendarDay::create_from_payload(&payload(json!({ "date": "29/02/2024" }))).unwrap();
    assert!(matches!(day.day(), Err(Error::ParseDate(_))));
  }

  #[test]
  fn test_calendar_day_new_formats_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(CalendarDay::new(date).date(), Some("2024-01-05"));
  }
}
