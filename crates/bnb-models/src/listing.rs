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

//! Listing resources: the listing itself, its photos, rooms and descriptions

use bnb_core::entity::{optional_f64, optional_i64, optional_str, required_i64, required_str};
use bnb_core::{field_accessors, Literal, RawPayload, Record, Result, Schema};

static LISTING_SCHEMA: Schema = Schema {
  entity: "Listing",
  fields: &[
    "id",
    "id_str",
    "has_availability",
    "check_in_option",
    "display_exact_location_to_guest",
    "tier",
    "listing_nickname",
    "common_spaces_shared_with_category",
    "user_defined_location",
    "listing_approval_status",
    "synchronization_category",
    "name",
    "property_type_group",
    "property_type_category",
    "room_type_category",
    "bedrooms",
    "bathrooms",
    "beds",
    "amenity_categories",
    "permit_or_tax_id",
    "apt",
    "street",
    "city",
    "state",
    "zipcode",
    "country_code",
    "lat",
    "lng",
    "directions",
    "listing_currency",
    "listing_price",
    "bathroom_shared",
    "bathroom_shared_with_category",
    "common_spaces_shared",
    "requested_approval_status_category",
    "total_inventory_count",
    "property_external_id",
    "house_manual",
    "wifi_network",
    "wifi_password",
  ],
  defaults: &[("person_capacity", Literal::Str("1"))],
  required: &["name", "country_code", "city", "lat", "lng", "listing_price"],
  excluded_from_export: &[
    "id",
    "id_str",
    "display_exact_location_to_guest",
    "tier",
    "listing_nickname",
    "common_spaces_shared_with_category",
    "user_defined_location",
    "listing_approval_status",
  ],
  ..Schema::EMPTY
};

/// A property listing
#[derive(Debug, Clone)]
pub struct Listing {
  record: Record,
}

impl Listing {
  pub const APPROVAL_NEW: &'static str = "new";
  pub const APPROVAL_READY_FOR_REVIEW: &'static str = "ready for review";
  pub const APPROVAL_REJECTED: &'static str = "rejected";
  pub const APPROVAL_APPROVED: &'static str = "approved";

  pub const SYNC_ALL: &'static str = "sync_all";
  pub const SYNC_RATES_AND_AVAILABILITY: &'static str = "sync_rates_and_availability";
  pub const SYNC_UNDECIDED: &'static str = "sync_undecided";

  /// Synchronization categories the API accepts
  pub const SYNCHRONIZATION_CATEGORIES: [&'static str; 3] =
    [Self::SYNC_ALL, Self::SYNC_RATES_AND_AVAILABILITY, Self::SYNC_UNDECIDED];

  pub fn new(
    name: impl Into<String>,
    country_code: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    listing_price: Option<i64>,
  ) -> Self {
    let mut record = Record::new(&LISTING_SCHEMA);
    record.set("name", name.into());
    record.set("country_code", country_code);
    record.set("city", city);
    record.set("lat", lat);
    record.set("lng", lng);
    record.set("listing_price", listing_price);
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    Ok(Self::new(
      required_str(raw, LISTING_SCHEMA.entity, "name")?,
      optional_str(raw, "country_code")?,
      optional_str(raw, "city")?,
      optional_f64(raw, "lat")?,
      optional_f64(raw, "lng")?,
      optional_i64(raw, "listing_price")?,
    ))
  }
}

impl_entity!(Listing, LISTING_SCHEMA);

field_accessors!(Listing {
  id: int,
  id_str: str,
  has_availability: bool,
  check_in_option: json,
  display_exact_location_to_guest: bool,
  tier: str,
  listing_nickname: str,
  common_spaces_shared_with_category: json,
  user_defined_location: bool,
  listing_approval_status: json,
  synchronization_category: str,
  name: str,
  property_type_group: str,
  property_type_category: str,
  room_type_category: str,
  bedrooms: int,
  bathrooms: float,
  beds: int,
  amenity_categories: json,
  permit_or_tax_id: str,
  apt: str,
  street: str,
  city: str,
  state: str,
  zipcode: str,
  country_code: str,
  lat: float,
  lng: float,
  directions: str,
  person_capacity: json,
  listing_currency: str,
  listing_price: int,
  bathroom_shared: bool,
  bathroom_shared_with_category: json,
  common_spaces_shared: bool,
  requested_approval_status_category: str,
  total_inventory_count: int,
  property_external_id: str,
  house_manual: str,
  wifi_network: str,
  wifi_password: str,
});

static LISTING_PHOTO_SCHEMA: Schema = Schema {
  entity: "ListingPhoto",
  fields: &[
    "listing_id",
    "listing_id_str",
    "content_type",
    "filename",
    "image",
    "caption",
    "sort_order",
    "id",
    "thumbnail_url",
    "small_url",
    "extra_medium_url",
    "large_url",
    "extra_large_url",
  ],
  required: &["listing_id", "image"],
  excluded_from_export: &[
    "thumbnail_url",
    "small_url",
    "extra_medium_url",
    "id",
    "listing_id_str",
    "large_url",
    "extra_large_url",
  ],
  ..Schema::EMPTY
};

/// A photo attached to a listing. `image` is the base64 encoded file on upload.
#[derive(Debug, Clone)]
pub struct ListingPhoto {
  record: Record,
}

impl ListingPhoto {
  pub fn new(listing_id: impl Into<String>, image: impl Into<String>) -> Self {
    let mut record = Record::new(&LISTING_PHOTO_SCHEMA);
    record.set("listing_id", listing_id.into());
    record.set("image", image.into());
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let entity = LISTING_PHOTO_SCHEMA.entity;
    Ok(Self::new(required_str(raw, entity, "listing_id")?, required_str(raw, entity, "image")?))
  }

  /// Body for a photo update: only caption and sort order can change
  pub fn update_payload(&self) -> RawPayload {
    let mut body = RawPayload::new();
    if let Some(caption) = self.caption() {
      body.insert("caption".to_string(), caption.into());
    }
    if let Some(sort_order) = self.sort_order() {
      body.insert("sort_order".to_string(), sort_order.into());
    }
    body
  }
}

impl_entity!(ListingPhoto, LISTING_PHOTO_SCHEMA);

field_accessors!(ListingPhoto {
  id: int,
  listing_id: json,
  listing_id_str: str,
  content_type: str,
  filename: str,
  image: str,
  caption: str,
  sort_order: int,
  thumbnail_url: str,
  small_url: str,
  extra_medium_url: str,
  large_url: str,
  extra_large_url: str,
});

static LISTING_ROOM_SCHEMA: Schema = Schema {
  entity: "ListingRoom",
  fields: &["id", "listing_id", "listing_id_str", "room_number", "beds", "room_amenities", "room_type"],
  required: &["listing_id", "room_number"],
  excluded_from_export: &["id", "listing_id_str"],
  ..Schema::EMPTY
};

/// A room of a listing, with its beds and amenities
#[derive(Debug, Clone)]
pub struct ListingRoom {
  record: Record,
}

impl ListingRoom {
  pub fn new(listing_id: i64, room_number: i64) -> Self {
    let mut record = Record::new(&LISTING_ROOM_SCHEMA);
    record.set("listing_id", listing_id);
    record.set("room_number", room_number);
    Self { record }
  }

  fn from_required(raw: &RawPayload) -> Result<Self> {
    let entity = LISTING_ROOM_SCHEMA.entity;
    Ok(Self::new(required_i64(raw, entity, "listing_id")?, required_i64(raw, entity, "room_number")?))
  }
}

impl_entity!(ListingRoom, LISTING_ROOM_SCHEMA);

field_accessors!(ListingRoom {
  id: int,
  listing_id: int,
  listing_id_str: str,
  room_number: int,
  beds: json,
  room_amenities: json,
  room_type: str,
});

static LISTING_DESCRIPTION_SCHEMA: Schema = Schema {
  entity: "ListingDescription",
  fields: &[
    "listing_id",
    "listing_id_str",
    "locale",
    "description",
    "machine_translated",
    "name",
    "summary",
    "space",
    "access",
    "interaction",
    "neighborhood_overview",
    "transit",
    "notes",
    "house_rules",
  ],
  excluded_from_export: &["id", "id_str", "description", "machine_translated"],
  ..Schema::EMPTY
};

/// Localized text describing a listing
#[derive(Debug, Clone)]
pub struct ListingDescription {
  record: Record,
}

impl ListingDescription {
  pub fn new() -> Self {
    Self { record: Record::new(&LISTING_DESCRIPTION_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for ListingDescription {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(ListingDescription, LISTING_DESCRIPTION_SCHEMA);

field_accessors!(ListingDescription {
  listing_id: int,
  listing_id_str: str,
  locale: str,
  description: str,
  machine_translated: bool,
  name: str,
  summary: str,
  space: str,
  access: str,
  interaction: str,
  neighborhood_overview: str,
  transit: str,
  notes: str,
  house_rules: str,
});
