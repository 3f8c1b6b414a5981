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

//! Messaging API: threads between hosts and guests, and outbound messages

use bnb_core::entity::{optional_str, required_i64, required_str};
use bnb_core::{field_accessors, Literal, Nested, RawPayload, Record, Result, Schema};

static MESSAGE_SCHEMA: Schema = Schema {
  entity: "Message",
  fields: &["thread_id", "message", "image", "content_type"],
  required: &["thread_id"],
  ..Schema::EMPTY
};

/// A message to post into an existing thread
#[derive(Debug, Clone)]
pub struct Message {
  record: Record,
}

impl Message {
  pub fn new(thread_id: impl Into<String>) -> Self {
    let mut record = Record::new(&MESSAGE_SCHEMA);
    record.set("thread_id", thread_id.into());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(required_str(raw, MESSAGE_SCHEMA.entity, "thread_id")?))
  }
}

impl_entity!(Message, MESSAGE_SCHEMA);

field_accessors!(Message {
  thread_id: json,
  message: str,
  image: str,
  content_type: str,
});

static THREAD_SCHEMA: Schema = Schema {
  entity: "Thread",
  fields: &[
    "id",
    "id_str",
    "thread_id_migration",
    "thread_id_migration_str",
    "business_purpose",
    "updated_at",
    "last_message_sent_at",
  ],
  required: &["id"],
  nested_single: &[Nested::of::<ThreadAttachment>("attachment")],
  nested_many: &[Nested::of::<ThreadUser>("users"), Nested::of::<ThreadMessage>("messages")],
  ..Schema::EMPTY
};

/// A conversation between a host and a guest.
///
/// Messages are kept in the order the API returned them.
#[derive(Debug, Clone)]
pub struct Thread {
  record: Record,
}

impl Thread {
  pub const BOOKING_DIRECT_THREAD: &'static str = "booking_direct_thread";
  pub const COHOSTING_DIRECT_THREAD: &'static str = "cohosting_direct_thread";
  pub const SUPPORT_MESSAGING_THREAD: &'static str = "support_messaging_thread";

  pub fn new(id_str: impl Into<String>) -> Self {
    let mut record = Record::new(&THREAD_SCHEMA);
    record.set("id_str", id_str.into());
    Self { record }
  }

  // id_str falls back to the numeric id when the payload only has the latter
  fn from_required(raw: &RawPayload) -> Result<Self> {
    let id_str = match optional_str(raw, "id_str")? {
      Some(id_str) => id_str,
      None => required_str(raw, THREAD_SCHEMA.entity, "id")?,
    };
    Ok(Self::new(id_str))
  }

  pub fn attachment(&self) -> Option<&ThreadAttachment> {
    self.record.single("attachment")
  }

  pub fn set_attachment(&mut self, attachment: Option<ThreadAttachment>) -> &mut Self {
    self.record.set_single("attachment", attachment);
    self
  }

  pub fn users(&self) -> impl Iterator<Item = &ThreadUser> {
    self.record.many("users")
  }

  pub fn add_user(&mut self, user: ThreadUser) -> &mut Self {
    self.record.push_many("users", user);
    self
  }

  pub fn messages(&self) -> impl Iterator<Item = &ThreadMessage> {
    self.record.many("messages")
  }

  pub fn add_message(&mut self, message: ThreadMessage) -> &mut Self {
    self.record.push_many("messages", message);
    self
  }
}

impl_entity!(Thread, THREAD_SCHEMA);

field_accessors!(Thread {
  id: int,
  id_str: str,
  thread_id_migration: int,
  thread_id_migration_str: str,
  business_purpose: str,
  updated_at: str,
  last_message_sent_at: str,
});

static THREAD_ATTACHMENT_SCHEMA: Schema = Schema {
  entity: "ThreadAttachment",
  fields: &["type", "status", "status_details"],
  required: &["type", "status"],
  nested_single: &[Nested::of::<ThreadBookingDetails>("booking_details")],
  nested_many: &[Nested::of::<ThreadRole>("roles")],
  ..Schema::EMPTY
};

/// What a thread is about: an inquiry, a special offer or a reservation
#[derive(Debug, Clone)]
pub struct ThreadAttachment {
  record: Record,
}

impl ThreadAttachment {
  pub const INQUIRY: &'static str = "Inquiry";
  pub const SPECIAL_OFFER: &'static str = "SpecialOffer";
  pub const RESERVATION: &'static str = "Reservation";

  pub fn new(kind: impl Into<String>, status: impl Into<String>) -> Self {
    let mut record = Record::new(&THREAD_ATTACHMENT_SCHEMA);
    record.set("type", kind.into());
    record.set("status", status.into());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let entity = THREAD_ATTACHMENT_SCHEMA.entity;
    Ok(Self::new(required_str(raw, entity, "type")?, required_str(raw, entity, "status")?))
  }

  pub fn booking_details(&self) -> Option<&ThreadBookingDetails> {
    self.record.single("booking_details")
  }

  pub fn set_booking_details(&mut self, details: Option<ThreadBookingDetails>) -> &mut Self {
    self.record.set_single("booking_details", details);
    self
  }

  pub fn roles(&self) -> impl Iterator<Item = &ThreadRole> {
    self.record.many("roles")
  }

  pub fn add_role(&mut self, role: ThreadRole) -> &mut Self {
    self.record.push_many("roles", role);
    self
  }
}

impl_entity!(ThreadAttachment, THREAD_ATTACHMENT_SCHEMA);

field_accessors!(ThreadAttachment {
  kind("type"): str,
  status: str,
  status_details: str,
});

static THREAD_BOOKING_DETAILS_SCHEMA: Schema = Schema {
  entity: "ThreadBookingDetails",
  fields: &[
    "listing_id",
    "listing_id_str",
    "listing_name",
    "checkin_date",
    "checkout_date",
    "nights",
    "number_of_guests",
    "number_of_adults",
    "number_of_children",
    "number_of_infants",
    "reservation_confirmation_code",
    "non_response_at",
    "expected_payout_amount_accurate",
  ],
  required: &["listing_id_str", "checkin_date", "checkout_date"],
  ..Schema::EMPTY
};

#[derive(Debug, Clone)]
pub struct ThreadBookingDetails {
  record: Record,
}

impl ThreadBookingDetails {
  pub fn new(
    listing_id_str: impl Into<String>,
    checkin_date: impl Into<String>,
    checkout_date: impl Into<String>,
  ) -> Self {
    let mut record = Record::new(&THREAD_BOOKING_DETAILS_SCHEMA);
    record.set("listing_id_str", listing_id_str.into());
    record.set("checkin_date", checkin_date.into());
    record.set("checkout_date", checkout_date.into());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let entity = THREAD_BOOKING_DETAILS_SCHEMA.entity;
    Ok(Self::new(
      required_str(raw, entity, "listing_id_str")?,
      required_str(raw, entity, "checkin_date")?,
      required_str(raw, entity, "checkout_date")?,
    ))
  }
}

impl_entity!(ThreadBookingDetails, THREAD_BOOKING_DETAILS_SCHEMA);

field_accessors!(ThreadBookingDetails {
  listing_id: int,
  listing_id_str: str,
  listing_name: str,
  checkin_date: str,
  checkout_date: str,
  nights: int,
  number_of_guests: int,
  number_of_adults: int,
  number_of_children: int,
  number_of_infants: int,
  reservation_confirmation_code: str,
  non_response_at: str,
  expected_payout_amount_accurate: str,
});

static THREAD_MESSAGE_SCHEMA: Schema = Schema {
  entity: "ThreadMessage",
  fields: &["id", "id_str", "message", "created_at", "content_type", "user_id", "thread_id", "thread_id_str"],
  defaults: &[("attachment_images", Literal::EmptyList)],
  required: &["id_str", "message", "user_id"],
  ..Schema::EMPTY
};

/// One message inside a thread
#[derive(Debug, Clone)]
pub struct ThreadMessage {
  record: Record,
}

impl ThreadMessage {
  pub fn new(id_str: impl Into<String>, message: impl Into<String>, user_id: impl Into<String>) -> Self {
    let mut record = Record::new(&THREAD_MESSAGE_SCHEMA);
    record.set("id_str", id_str.into());
    record.set("message", message.into());
    record.set("user_id", user_id.into());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let entity = THREAD_MESSAGE_SCHEMA.entity;
    Ok(Self::new(
      required_str(raw, entity, "id_str")?,
      required_str(raw, entity, "message")?,
      required_str(raw, entity, "user_id")?,
    ))
  }
}

impl_entity!(ThreadMessage, THREAD_MESSAGE_SCHEMA);

field_accessors!(ThreadMessage {
  id: int,
  id_str: str,
  message: str,
  created_at: str,
  attachment_images: json,
  content_type: str,
  user_id: json,
  thread_id: int,
  thread_id_str: str,
});

static THREAD_ROLE_SCHEMA: Schema = Schema {
  entity: "ThreadRole",
  fields: &["role"],
  defaults: &[("user_ids", Literal::EmptyList)],
  required: &["role"],
  ..Schema::EMPTY
};

/// Which users play which part (owner, guest, cohost) in a thread
#[derive(Debug, Clone)]
pub struct ThreadRole {
  record: Record,
}

impl ThreadRole {
  pub const OWNER: &'static str = "owner";
  pub const GUEST: &'static str = "guest";
  pub const COHOST: &'static str = "cohost";

  pub fn new(role: impl Into<String>) -> Self {
    let mut record = Record::new(&THREAD_ROLE_SCHEMA);
    record.set("role", role.into());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(required_str(raw, THREAD_ROLE_SCHEMA.entity, "role")?))
  }

  /// Numeric ids in `user_ids`; non-numeric entries are skipped
  pub fn user_id_list(&self) -> Vec<i64> {
    self
      .user_ids()
      .and_then(|ids| ids.as_array())
      .map(|ids| ids.iter().filter_map(|id| id.as_i64()).collect())
      .unwrap_or_default()
  }
}

impl_entity!(ThreadRole, THREAD_ROLE_SCHEMA);

field_accessors!(ThreadRole {
  role: str,
  user_ids: json,
});

static THREAD_USER_SCHEMA: Schema = Schema {
  entity: "ThreadUser",
  fields: &["id", "first_name", "preferred_locale", "location"],
  required: &["id"],
  ..Schema::EMPTY
};

#[derive(Debug, Clone)]
pub struct ThreadUser {
  record: Record,
}

impl ThreadUser {
  pub fn new(id: i64) -> Self {
    let mut record = Record::new(&THREAD_USER_SCHEMA);
    record.set("id", id);
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(required_i64(raw, THREAD_USER_SCHEMA.entity, "id")?))
  }
}

impl_entity!(ThreadUser, THREAD_USER_SCHEMA);

field_accessors!(ThreadUser {
  id: int,
  first_name: str,
  preferred_locale: str,
  location: str,
});
