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

//! Reservations and reservation alteration requests

use crate::calendar::parse_date;
use bnb_core::{field_accessors, RawPayload, Record, Result, Schema};
use chrono::NaiveDate;

static RESERVATION_SCHEMA: Schema = Schema {
  entity: "Reservation",
  fields: &[
    "cancellation_policy_category",
    "confirmation_code",
    "created_at",
    "updated_at",
    "booked_at",
    "start_date",
    "end_date",
    "guest_details",
    "guest_email",
    "guest_first_name",
    "guest_last_name",
    "guest_id",
    "guest_phone_numbers",
    "guest_preferred_locale",
    "host_currency",
    "host_id",
    "expected_payout_amount_accurate",
    "listing_base_price_accurate",
    "host_fee_base_accurate",
    "host_fee_vat_accurate",
    "listing_host_fee_accurate",
    "listing_security_price_accurate",
    "listing_cleaning_fee_accurate",
    "listing_cancellation_payout_accurate",
    "listing_cancellation_host_fee_accurate",
    "listing_id",
    "listing_id_str",
    "special_offer_id",
    "nights",
    "number_of_guests",
    "status_type",
    "standard_fees_details",
    "thread_id",
    "thread_id_str",
    "thread_id_migration",
    "thread_id_migration_str",
    "total_paid_amount_accurate",
    "promotion_details",
    "pricing_rule_details",
    "cleanup_days",
    "check_in_datetime",
    "check_in_ends_at_datetime",
    "check_out_datetime",
    "time_zone",
    "apt",
    "property_id",
    "property_id_str",
    "rate_plan_id",
    "expected_payout_amount_before_taxes_accurate",
    "airbnb_collected_tax_amount_accurate",
    "airbnb_collected_tax_details",
    "pass_through_tax_expected_amount_accurate",
    "pass_through_tax_details",
    "pass_through_tax_amount_paid_to_host_accurate",
    "transient_occupancy_tax_paid_amount_accurate",
    "transient_occupancy_tax_details",
    "occupancy_tax_amount_paid_to_host_accurate",
  ],
  ..Schema::EMPTY
};

/// A guest booking of a listing.
///
/// Amounts suffixed `_accurate` are decimal strings in `host_currency`.
#[derive(Debug, Clone)]
pub struct Reservation {
  record: Record,
}

impl Reservation {
  pub const STATUS_TYPE_CANCELLED_BY_HOST: &'static str = "cancelled_by_host";
  pub const STATUS_TYPE_CANCELLED_BY_GUEST: &'static str = "cancelled_by_guest";
  pub const STATUS_TYPE_CANCELLED_BY_ADMIN: &'static str = "cancelled_by_admin";
  pub const STATUS_TYPE_ACCEPT: &'static str = "accept";

  pub fn new() -> Self {
    Self { record: Record::new(&RESERVATION_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }

  /// Check-in and check-out dates
  pub fn stay(&self) -> Result<(NaiveDate, NaiveDate)> {
    Ok((parse_date("start_date", self.start_date())?, parse_date("end_date", self.end_date())?))
  }

  pub fn is_cancelled(&self) -> bool {
    self.status_type().is_some_and(|status| status.starts_with("cancelled_by_"))
  }
}

impl Default for Reservation {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(Reservation, RESERVATION_SCHEMA);

field_accessors!(Reservation {
  cancellation_policy_category: str,
  confirmation_code: str,
  created_at: str,
  updated_at: str,
  booked_at: str,
  start_date: str,
  end_date: str,
  guest_details: json,
  guest_email: str,
  guest_first_name: str,
  guest_last_name: str,
  guest_id: int,
  guest_phone_numbers: json,
  guest_preferred_locale: str,
  host_currency: str,
  host_id: int,
  expected_payout_amount_accurate: str,
  listing_base_price_accurate: str,
  host_fee_base_accurate: str,
  host_fee_vat_accurate: str,
  listing_host_fee_accurate: str,
  listing_security_price_accurate: str,
  listing_cleaning_fee_accurate: str,
  listing_cancellation_payout_accurate: str,
  listing_cancellation_host_fee_accurate: str,
  listing_id: int,
  listing_id_str: str,
  special_offer_id: int,
  nights: int,
  number_of_guests: int,
  status_type: str,
  standard_fees_details: json,
  thread_id: int,
  thread_id_str: str,
  thread_id_migration: int,
  thread_id_migration_str: str,
  total_paid_amount_accurate: str,
  promotion_details: json,
  pricing_rule_details: json,
  cleanup_days: int,
  check_in_datetime: str,
  check_in_ends_at_datetime: str,
  check_out_datetime: str,
  time_zone: str,
  apt: str,
  property_id: int,
  property_id_str: str,
  rate_plan_id: json,
  expected_payout_amount_before_taxes_accurate: str,
  airbnb_collected_tax_amount_accurate: str,
  airbnb_collected_tax_details: json,
  pass_through_tax_expected_amount_accurate: str,
  pass_through_tax_details: json,
  pass_through_tax_amount_paid_to_host_accurate: str,
  transient_occupancy_tax_paid_amount_accurate: str,
  transient_occupancy_tax_details: json,
  occupancy_tax_amount_paid_to_host_accurate: str,
});

static RESERVATION_ALTERATION_SCHEMA: Schema = Schema {
  entity: "ReservationAlteration",
  fields: &[
    "id",
    "id_str",
    "confirmation_code",
    "listing_id",
    "listing_id_str",
    "created_at",
    "updated_at",
    "response_at",
    "status",
    "initiated_by",
    "start_date",
    "end_date",
    "nights",
    "guest_details",
    "expected_payout_amount_accurate",
    "listing_base_price_accurate",
    "listing_host_fee_accurate",
    "listing_cleaning_fee_accurate",
    "listing_cancellation_payout_accurate",
    "listing_cancellation_host_fee_accurate",
    "standard_fees_details",
    "promotion_details",
    "pricing_rule_details",
    "host_fee_base_accurate",
    "host_fee_vat_accurate",
    "expected_payout_amount_before_taxes_accurate",
    "airbnb_collected_tax_amount_accurate",
    "airbnb_collected_tax_details",
    "pass_through_tax_details",
    "pass_through_tax_expected_amount_accurate",
  ],
  ..Schema::EMPTY
};

/// A request to change the dates, guests or price of a reservation
#[derive(Debug, Clone)]
pub struct ReservationAlteration {
  record: Record,
}

impl ReservationAlteration {
  pub const STATUS_ACCEPTED: &'static str = "ACCEPTED";
  pub const STATUS_PENDING: &'static str = "PENDING";
  pub const STATUS_CANCELED: &'static str = "CANCELED";
  pub const STATUS_DECLINED: &'static str = "DECLINED";
  pub const STATUS_VOID: &'static str = "VOID";
  pub const STATUS_AWAITING_PAYMENT: &'static str = "AWAITING_PAYMENT";

  pub const INITIATED_BY_HOST: &'static str = "host";
  pub const INITIATED_BY_GUEST: &'static str = "guest";
  pub const INITIATED_BY_ADMIN: &'static str = "admin";

  pub fn new() -> Self {
    Self { record: Record::new(&RESERVATION_ALTERATION_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }

  pub fn is_pending(&self) -> bool {
    self.status() == Some(Self::STATUS_PENDING)
  }
}

impl Default for ReservationAlteration {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(ReservationAlteration, RESERVATION_ALTERATION_SCHEMA);

field_accessors!(ReservationAlteration {
  id: int,
  id_str: str,
  confirmation_code: str,
  listing_id: int,
  listing_id_str: str,
  created_at: str,
  updated_at: str,
  response_at: str,
  status: str,
  initiated_by: str,
  start_date: str,
  end_date: str,
  nights: int,
  guest_details: json,
  expected_payout_amount_accurate: str,
  listing_base_price_accurate: str,
  listing_host_fee_accurate: str,
  listing_cleaning_fee_accurate: str,
  listing_cancellation_payout_accurate: str,
  listing_cancellation_host_fee_accurate: str,
  standard_fees_details: json,
  promotion_details: json,
  pricing_rule_details: json,
  host_fee_base_accurate: str,
  host_fee_vat_accurate: str,
  expected_payout_amount_before_taxes_accurate: str,
  airbnb_collected_tax_amount_accurate: str,
  airbnb_collected_tax_details: json,
  pass_through_tax_details: json,
  pass_through_tax_expected_amount_accurate: str,
});

#[cfg(test)]
mod tests {
  use super::*;
  use bnb_core::test_utils::{assert_contains_payload, non_null_keys, payload};
  use bnb_core::{Entity, Error};
  use serde_json::json;

  fn reservation_payload() -> RawPayload {
    payload(json!({
      "confirmation_code": "HMABCDEF12",
      "start_date": "2024-07-01",
      "end_date": "2024-07-05",
      "nights": 4,
      "number_of_guests": 2,
      "listing_id": 12,
      "listing_id_str": "12",
      "host_currency": "EUR",
      "expected_payout_amount_accurate": "512.40",
      "status_type": "accept",
      "guest_details": { "number_of_adults": 2, "number_of_children": 0 },
      "is_business_travel": false
    }))
  }

  #[test]
  fn test_reservation_round_trip_keeps_unknown_fields() {
    let raw = reservation_payload();
    let reservation = Reservation::create_from_payload(&raw).unwrap();

    assert_eq!(reservation.confirmation_code(), Some("HMABCDEF12"));
    assert_eq!(reservation.expected_payout_amount_accurate(), Some("512.40"));
    assert_eq!(reservation.extra_fields(), payload(json!({ "is_business_travel": false })));
    assert_eq!(reservation.export_payload(true), raw);
    assert_contains_payload(&reservation.export_payload(false), &raw);
  }

  #[test]
  fn test_reservation_stay_dates() {
    let reservation = Reservation::create_from_payload(&reservation_payload()).unwrap();
    let (start, end) = reservation.stay().unwrap();
    assert_eq!((end - start).num_days(), reservation.nights().unwrap());
    assert!(!reservation.is_cancelled());
  }

  #[test]
  fn test_reservation_without_dates() {
    let reservation = Reservation::new();
    assert!(matches!(reservation.stay(), Err(Error::InvalidShape { .. })));
  }

  #[test]
  fn test_cancelled_status() {
    let mut reservation = Reservation::new();
    reservation.set_status_type(Reservation::STATUS_TYPE_CANCELLED_BY_GUEST);
    assert!(reservation.is_cancelled());
  }

  #[test]
  fn test_alteration_fields() {
    let alteration = ReservationAlteration::create_from_payload(&payload(json!({
      "id": 77,
      "id_str": "77",
      "confirmation_code": "HMABCDEF12",
      "status": "PENDING",
      "initiated_by": "guest",
      "nights": 5
    })))
    .unwrap();

    assert!(alteration.is_pending());
    assert_eq!(alteration.initiated_by(), Some(ReservationAlteration::INITIATED_BY_GUEST));
    assert_eq!(
      non_null_keys(&alteration.export_payload(false)),
      vec!["confirmation_code", "id", "id_str", "initiated_by", "nights", "status"]
    );
  }
}
