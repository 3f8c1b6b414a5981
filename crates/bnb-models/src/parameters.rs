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

//! Query and body parameters for list and action endpoints.
//!
//! These are entities like any other so that they export through the same
//! null-suppressing path before being sent.

use bnb_core::entity::{required_i64, required_str};
use bnb_core::{field_accessors, Literal, RawPayload, Record, Result, Schema};

static GET_ALL_LISTINGS_SCHEMA: Schema = Schema {
  entity: "GetAllListingsParameters",
  fields: &["_cursor"],
  defaults: &[
    ("has_availability", Literal::Bool(true)),
    ("exclude_active", Literal::Bool(false)),
    ("exclude_cohosted_listings", Literal::Bool(false)),
    ("_limit", Literal::Int(20)),
    ("_offset", Literal::Int(0)),
  ],
  ..Schema::EMPTY
};

/// Filters and paging for a user's listings
#[derive(Debug, Clone)]
pub struct GetAllListingsParameters {
  record: Record,
}

impl GetAllListingsParameters {
  pub fn new() -> Self {
    Self { record: Record::new(&GET_ALL_LISTINGS_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for GetAllListingsParameters {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(GetAllListingsParameters, GET_ALL_LISTINGS_SCHEMA);

field_accessors!(GetAllListingsParameters {
  has_availability: bool,
  exclude_active: bool,
  exclude_cohosted_listings: bool,
  limit("_limit"): int,
  offset("_offset"): int,
  cursor("_cursor"): str,
});

static RETRIEVE_ALL_RESERVATIONS_SCHEMA: Schema = Schema {
  entity: "RetrieveAllReservationsParameters",
  fields: &[
    "host_id",
    "listing_id",
    "start_date",
    "end_date",
    "all_status",
    "include_only_status",
    "_limit",
    "_offset",
    "_cursor",
  ],
  required: &["host_id"],
  ..Schema::EMPTY
};

/// Filters and paging for a host's reservations
#[derive(Debug, Clone)]
pub struct RetrieveAllReservationsParameters {
  record: Record,
}

impl RetrieveAllReservationsParameters {
  pub const STATUS_PENDING: &'static str = "pending";
  pub const STATUS_DENY: &'static str = "deny";
  pub const STATUS_TIMEOUT: &'static str = "timeout";
  pub const STATUS_ACCEPT: &'static str = "accept";
  pub const STATUS_CANCELLED_BY_HOST: &'static str = "cancelled_by_host";
  pub const STATUS_CANCELLED_BY_GUEST: &'static str = "cancelled_by_guest";
  pub const STATUS_CANCELLED_BY_ADMIN: &'static str = "cancelled_by_admin";

  pub fn new(host_id: i64) -> Self {
    let mut record = Record::new(&RETRIEVE_ALL_RESERVATIONS_SCHEMA);
    record.set("host_id", host_id);
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(required_i64(raw, RETRIEVE_ALL_RESERVATIONS_SCHEMA.entity, "host_id")?))
  }
}

impl_entity!(RetrieveAllReservationsParameters, RETRIEVE_ALL_RESERVATIONS_SCHEMA);

field_accessors!(RetrieveAllReservationsParameters {
  host_id: int,
  listing_id: int,
  start_date: str,
  end_date: str,
  all_status: bool,
  include_only_status: str,
  limit("_limit"): int,
  offset("_offset"): int,
  cursor("_cursor"): str,
});

static ACCEPT_OR_DENY_SCHEMA: Schema = Schema {
  entity: "AcceptOrDenyPendingReservationRequestParameters",
  fields: &["attempt_action", "decline_reason", "decline_message_to_guest", "decline_message_to_airbnb"],
  required: &["attempt_action"],
  ..Schema::EMPTY
};

/// Host answer to a pending booking request
#[derive(Debug, Clone)]
pub struct AcceptOrDenyPendingReservationRequestParameters {
  record: Record,
}

impl AcceptOrDenyPendingReservationRequestParameters {
  pub const ATTEMPT_ACTION_ACCEPT: &'static str = "accept";
  pub const ATTEMPT_ACTION_DENY: &'static str = "deny";

  pub const DECLINE_REASON_DATES_NOT_AVAILABLE: &'static str = "dates_not_available";
  pub const DECLINE_REASON_NOT_A_GOOD_FIT: &'static str = "not_a_good_fit";
  pub const DECLINE_REASON_WAITING_FOR_BETTER_RESERVATION: &'static str = "waiting_for_better_reservation";
  pub const DECLINE_REASON_NOT_COMFORTABLE: &'static str = "not_comfortable";

  pub fn new(attempt_action: impl Into<String>) -> Self {
    let mut record = Record::new(&ACCEPT_OR_DENY_SCHEMA);
    record.set("attempt_action", attempt_action.into());
    Self { record }
  }

  pub fn accept() -> Self {
    Self::new(Self::ATTEMPT_ACTION_ACCEPT)
  }

  /// A denial carrying the reason and both messages the API expects
  pub fn deny(reason: &str, message_to_guest: &str, message_to_airbnb: &str) -> Self {
    let mut params = Self::new(Self::ATTEMPT_ACTION_DENY);
    params
      .set_decline_reason(reason)
      .set_decline_message_to_guest(message_to_guest)
      .set_decline_message_to_airbnb(message_to_airbnb);
    params
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(required_str(raw, ACCEPT_OR_DENY_SCHEMA.entity, "attempt_action")?))
  }
}

impl_entity!(AcceptOrDenyPendingReservationRequestParameters, ACCEPT_OR_DENY_SCHEMA);

field_accessors!(AcceptOrDenyPendingReservationRequestParameters {
  attempt_action: str,
  decline_reason: str,
  decline_message_to_guest: str,
  decline_message_to_airbnb: str,
});

static CANCEL_ACTIVE_RESERVATION_SCHEMA: Schema = Schema {
  entity: "CancelActiveReservationParameters",
  fields: &["status_type", "reason", "sub_reason", "message_to_guest", "message_to_airbnb"],
  required: &["status_type", "reason"],
  ..Schema::EMPTY
};

/// Cancellation of an accepted reservation by the host
#[derive(Debug, Clone)]
pub struct CancelActiveReservationParameters {
  record: Record,
}

impl CancelActiveReservationParameters {
  pub const STATUS_TYPE_CANCELLED_BY_HOST: &'static str = "cancelled_by_host";

  pub fn new(status_type: impl Into<String>, reason: impl Into<String>) -> Self {
    let mut record = Record::new(&CANCEL_ACTIVE_RESERVATION_SCHEMA);
    record.set("status_type", status_type.into());
    record.set("reason", reason.into());
    Self { record }
  }

  pub fn by_host(reason: impl Into<String>) -> Self {
    Self::new(Self::STATUS_TYPE_CANCELLED_BY_HOST, reason)
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let entity = CANCEL_ACTIVE_RESERVATION_SCHEMA.entity;
    Ok(Self::new(required_str(raw, entity, "status_type")?, required_str(raw, entity, "reason")?))
  }
}

impl_entity!(CancelActiveReservationParameters, CANCEL_ACTIVE_RESERVATION_SCHEMA);

field_accessors!(CancelActiveReservationParameters {
  status_type: str,
  reason: str,
  sub_reason: str,
  message_to_guest: str,
  message_to_airbnb: str,
});
