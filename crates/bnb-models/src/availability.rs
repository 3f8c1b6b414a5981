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

//! Availability rules and booking settings of a listing

use bnb_core::entity::strip_nulls;
use bnb_core::{field_accessors, RawPayload, Record, Result, Schema};
use serde_json::Value;

static AVAILABILITY_RULES_SCHEMA: Schema = Schema {
  entity: "AvailabilityRules",
  fields: &[
    "default_min_nights",
    "default_max_nights",
    "booking_lead_time",
    "min_days_notice",
    "max_days_notice",
    "seasonal_min_nights",
    "turnover_days",
    "day_of_week_check_in",
    "day_of_week_check_out",
    "day_of_week_min_nights",
    "allow_rtb_above_max_nights",
    "skip_response",
  ],
  ..Schema::EMPTY
};

/// Stay length, notice and turnover rules.
///
/// Most rules are small JSON objects (`{"hours": 24}`, `{"days": 1}`) and
/// are carried as raw values.
#[derive(Debug, Clone)]
pub struct AvailabilityRules {
  record: Record,
}

impl AvailabilityRules {
  pub fn new() -> Self {
    Self { record: Record::new(&AVAILABILITY_RULES_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for AvailabilityRules {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(AvailabilityRules, AVAILABILITY_RULES_SCHEMA);

field_accessors!(AvailabilityRules {
  default_min_nights: int,
  default_max_nights: int,
  booking_lead_time: json,
  min_days_notice: json,
  max_days_notice: json,
  seasonal_min_nights: json,
  turnover_days: json,
  day_of_week_check_in: json,
  day_of_week_check_out: json,
  day_of_week_min_nights: json,
  allow_rtb_above_max_nights: bool,
  skip_response: bool,
});

static BOOKING_SETTINGS_SCHEMA: Schema = Schema {
  entity: "BookingSettings",
  fields: &[
    "listing_id",
    "listing_id_str",
    "cancellation_policy_category",
    "cancellation_policy_settings",
    "check_in_time_start",
    "check_in_time_end",
    "check_out_time",
    "instant_booking_allowed_category",
    "instant_book_welcome_message",
    "listing_expectations_for_guests",
    "guest_controls",
    "skip_response",
  ],
  excluded_from_export: &["listing_id", "listing_id_str", "cancellation_policy_category"],
  ..Schema::EMPTY
};

/// Placeholder the API returns for settings the host never chose
pub const NOT_SELECTED: &str = "NOT_SELECTED";

/// Check-in window, instant booking policy and house expectations
#[derive(Debug, Clone)]
pub struct BookingSettings {
  record: Record,
}

impl BookingSettings {
  pub const INSTANT_BOOKING_EVERYONE: &'static str = "everyone";
  pub const INSTANT_BOOKING_EXPERIENCED: &'static str = "experienced";
  pub const INSTANT_BOOKING_GOVERNMENT_ID: &'static str = "government_id";
  pub const INSTANT_BOOKING_EXPERIENCED_WITH_GOVERNMENT_ID: &'static str =
    "experienced_guest_with_government_id";

  /// Accepted hours for `check_in_time_start`; 24 and 25 are 00:00 and 01:00 the next day
  pub const CHECK_IN_TIME_START: std::ops::RangeInclusive<i64> = 8..=25;
  pub const CHECK_IN_TIME_END: std::ops::RangeInclusive<i64> = 9..=26;
  pub const CHECK_OUT_TIME: std::ops::RangeInclusive<i64> = 0..=23;

  pub fn new() -> Self {
    Self { record: Record::new(&BOOKING_SETTINGS_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for BookingSettings {
  fn default() -> Self {
    Self::new()
  }
}

/// Rewrite an exported booking settings payload into what the API accepts back.
///
/// Top-level `NOT_SELECTED` placeholders become null, null guest controls
/// are dropped and an empty `guest_controls` is removed altogether.
fn normalize_booking_settings(payload: &mut RawPayload) {
  for value in payload.values_mut() {
    if value.as_str() == Some(NOT_SELECTED) {
      *value = Value::Null;
    }
  }

  let now_empty = match payload.get_mut("guest_controls") {
    Some(Value::Object(controls)) => {
      strip_nulls(controls);
      controls.is_empty()
    }
    Some(Value::Array(controls)) => {
      controls.retain(|control| !control.is_null());
      controls.is_empty()
    }
    _ => false,
  };
  if now_empty {
    payload.remove("guest_controls");
  }
}

impl_entity!(BookingSettings, BOOKING_SETTINGS_SCHEMA, {
  fn export_payload(&self, without_nulls: bool) -> RawPayload {
    let mut payload = self.record.export(false);
    normalize_booking_settings(&mut payload);
    if without_nulls {
      strip_nulls(&mut payload);
    }
    payload
  }
});

field_accessors!(BookingSettings {
  listing_id: int,
  listing_id_str: str,
  cancellation_policy_category: str,
  cancellation_policy_settings: json,
  check_in_time_start: str,
  check_in_time_end: str,
  check_out_time: int,
  instant_booking_allowed_category: str,
  instant_book_welcome_message: str,
  listing_expectations_for_guests: json,
  guest_controls: json,
  skip_response: bool,
});
