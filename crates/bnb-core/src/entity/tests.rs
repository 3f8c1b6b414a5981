use super::*;
use crate::error::Error;
use crate::test_utils::{assert_contains_payload, non_null_keys, payload};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct Role {
  record: Record,
}

static ROLE_SCHEMA: Schema = Schema {
  entity: "Role",
  fields: &["role"],
  defaults: &[("user_ids", Literal::EmptyList)],
  required: &["role"],
  ..Schema::EMPTY
};

impl Entity for Role {
  fn schema() -> &'static Schema {
    &ROLE_SCHEMA
  }

  fn instantiate(raw: &RawPayload) -> crate::Result<Self> {
    let mut record = Record::new(&ROLE_SCHEMA);
    record.set("role", required_str(raw, "Role", "role")?);
    Ok(Self { record })
  }

  fn record(&self) -> &Record {
    &self.record
  }

  fn record_mut(&mut self) -> &mut Record {
    &mut self.record
  }
}

#[derive(Debug, Clone)]
struct BookingDetails {
  record: Record,
}

static BOOKING_SCHEMA: Schema = Schema {
  entity: "BookingDetails",
  fields: &["listing_id_str", "checkin_date", "checkout_date", "nights"],
  required: &["listing_id_str", "checkin_date", "checkout_date"],
  ..Schema::EMPTY
};

impl Entity for BookingDetails {
  fn schema() -> &'static Schema {
    &BOOKING_SCHEMA
  }

  fn instantiate(_raw: &RawPayload) -> crate::Result<Self> {
    Ok(Self { record: Record::new(&BOOKING_SCHEMA) })
  }

  fn record(&self) -> &Record {
    &self.record
  }

  fn record_mut(&mut self) -> &mut Record {
    &mut self.record
  }
}

#[derive(Debug, Clone)]
struct Attachment {
  record: Record,
}

static ATTACHMENT_SCHEMA: Schema = Schema {
  entity: "Attachment",
  fields: &["type", "status", "status_details", "internal_id"],
  excluded_from_export: &["internal_id"],
  nested_single: &[Nested::of::<BookingDetails>("booking_details")],
  nested_many: &[Nested::of::<Role>("roles")],
  ..Schema::EMPTY
};

impl Entity for Attachment {
  fn schema() -> &'static Schema {
    &ATTACHMENT_SCHEMA
  }

  fn instantiate(_raw: &RawPayload) -> crate::Result<Self> {
    Ok(Self { record: Record::new(&ATTACHMENT_SCHEMA) })
  }

  fn record(&self) -> &Record {
    &self.record
  }

  fn record_mut(&mut self) -> &mut Record {
    &mut self.record
  }
}

crate::field_accessors!(Attachment {
  kind("type"): str,
  status: str,
  internal_id: int,
});

#[test]
fn test_create_keeps_unknown_fields() {
  let role = Role::create_from_payload(&payload(json!({
    "role": "owner",
    "added_later_by_api": { "x": 1 }
  })))
  .unwrap();

  assert_eq!(role.record().get_str("role"), Some("owner"));
  assert_eq!(role.extra_fields(), payload(json!({ "added_later_by_api": { "x": 1 } })));
  assert_eq!(role.export_payload(false)["added_later_by_api"], json!({ "x": 1 }));
}

#[test]
fn test_create_reports_every_missing_field() {
  let result = BookingDetails::create_from_payload(&payload(json!({ "nights": 3 })));
  match result {
    Err(Error::MissingRequiredFields { entity, fields }) => {
      assert_eq!(entity, "BookingDetails");
      assert_eq!(fields, vec!["listing_id_str", "checkin_date", "checkout_date"]);
    }
    other => panic!("Expected MissingRequiredFields, got {:?}", other),
  }
}

#[test]
fn test_nested_single_round_trip() {
  let details = json!({
    "listing_id_str": "1",
    "checkin_date": "2024-01-01",
    "checkout_date": "2024-01-05"
  });
  let attachment =
    Attachment::create_from_payload(&payload(json!({ "booking_details": details.clone() }))).unwrap();

  let nested = attachment.record().single::<BookingDetails>("booking_details").unwrap();
  assert_eq!(nested.record().get_str("checkin_date"), Some("2024-01-01"));

  let exported = attachment.export_payload(true);
  assert_eq!(exported["booking_details"], json!({
    "listing_id_str": "1",
    "checkin_date": "2024-01-01",
    "checkout_date": "2024-01-05",
    "nights": null
  }));
}

#[test]
fn test_nested_single_required_fields_propagate() {
  let result = Attachment::create_from_payload(&payload(json!({
    "booking_details": { "listing_id_str": "1" }
  })));
  assert!(matches!(
    result,
    Err(Error::MissingRequiredFields { entity: "BookingDetails", .. })
  ));
}

#[test]
fn test_nested_many_exports_full_sequence_in_order() {
  let attachment = Attachment::create_from_payload(&payload(json!({
    "roles": [{ "role": "owner" }, { "role": "guest" }]
  })))
  .unwrap();

  let roles: Vec<_> = attachment.record().many::<Role>("roles").collect();
  assert_eq!(roles.len(), 2);

  let exported = attachment.export_payload(false);
  assert_eq!(exported["roles"], json!([
    { "role": "owner", "user_ids": [] },
    { "role": "guest", "user_ids": [] }
  ]));
}

#[test]
fn test_fill_twice_accumulates_nested_many() {
  let mut attachment = Attachment::create_from_payload(&payload(json!({}))).unwrap();
  attachment.fill_from_payload(&payload(json!({ "roles": [{ "role": "owner" }] }))).unwrap();
  attachment.fill_from_payload(&payload(json!({ "roles": [{ "role": "guest" }] }))).unwrap();

  let names: Vec<_> = attachment
    .record()
    .many::<Role>("roles")
    .filter_map(|r| r.record().get_str("role"))
    .collect();
  assert_eq!(names, vec!["owner", "guest"]);
}

#[test]
fn test_fill_overwrites_scalars_and_chains() {
  let mut attachment = Attachment::create_from_payload(&payload(json!({ "status": "open" }))).unwrap();
  let status = attachment
    .fill_from_payload(&payload(json!({ "status": "closed" })))
    .unwrap()
    .status()
    .map(str::to_string);
  assert_eq!(status.as_deref(), Some("closed"));
}

#[test]
fn test_null_suppression_only_drops_nulls() {
  let mut attachment = Attachment::create_from_payload(&payload(json!({
    "type": "Inquiry",
    "status": "",
    "status_details": null
  })))
  .unwrap();
  attachment.set_kind("Reservation");

  let full = attachment.export_payload(false);
  let trimmed = attachment.export_payload(true);

  assert!(full.contains_key("status_details"));
  assert!(!trimmed.contains_key("status_details"));
  assert_eq!(trimmed["status"], json!(""));
  assert_eq!(trimmed["roles"], json!([]));
  assert_eq!(trimmed["type"], json!("Reservation"));
  assert!(!trimmed.contains_key("booking_details"));
  assert!(full["booking_details"].is_null());
}

#[test]
fn test_excluded_fields_never_exported() {
  let mut attachment =
    Attachment::create_from_payload(&payload(json!({ "internal_id": 7 }))).unwrap();
  assert_eq!(attachment.internal_id(), Some(7));
  assert!(!attachment.export_payload(false).contains_key("internal_id"));
  assert!(!attachment.export_payload(true).contains_key("internal_id"));

  attachment.set_internal_id(Value::Null);
  assert!(!attachment.export_payload(false).contains_key("internal_id"));
}

#[test]
fn test_round_trip_restricted_to_exportable_fields() {
  let raw = payload(json!({
    "type": "Inquiry",
    "status": "pending",
    "internal_id": 9,
    "unknown": [1, 2],
    "booking_details": {
      "listing_id_str": "1",
      "checkin_date": "2024-01-01",
      "checkout_date": "2024-01-05",
      "nights": 4
    },
    "roles": [{ "role": "owner", "user_ids": [1] }]
  }));
  let attachment = Attachment::create_from_payload(&raw).unwrap();
  let exported = attachment.export_payload(false);

  let mut expected = raw.clone();
  expected.remove("internal_id");
  assert_contains_payload(&exported, &expected);
  assert_eq!(non_null_keys(&exported), vec!["booking_details", "roles", "status", "type", "unknown"]);
}

#[test]
fn test_malformed_nested_values_fail_fast() {
  let not_a_list = Attachment::create_from_payload(&payload(json!({ "roles": { "role": "owner" } })));
  assert!(matches!(not_a_list, Err(Error::InvalidShape { ref field, .. }) if field == "roles"));

  let not_an_object = Attachment::create_from_payload(&payload(json!({ "roles": ["owner"] })));
  assert!(matches!(not_an_object, Err(Error::InvalidShape { .. })));

  let scalar_single = Attachment::create_from_payload(&payload(json!({ "booking_details": 5 })));
  assert!(matches!(scalar_single, Err(Error::InvalidShape { .. })));
}

#[test]
fn test_null_nested_values() {
  let mut attachment = Attachment::create_from_payload(&payload(json!({
    "booking_details": {
      "listing_id_str": "1",
      "checkin_date": "2024-01-01",
      "checkout_date": "2024-01-05"
    },
    "roles": null
  })))
  .unwrap();
  assert!(attachment.record().single::<BookingDetails>("booking_details").is_some());
  assert_eq!(attachment.record().many::<Role>("roles").count(), 0);

  attachment.fill_from_payload(&payload(json!({ "booking_details": null }))).unwrap();
  assert!(attachment.record().single::<BookingDetails>("booking_details").is_none());
}

#[test]
fn test_export_has_no_side_effects() {
  let attachment = Attachment::create_from_payload(&payload(json!({
    "status_details": null,
    "roles": [{ "role": "owner" }]
  })))
  .unwrap();
  let first = attachment.export_payload(true);
  let second = attachment.export_payload(false);
  assert!(second.contains_key("status_details"));
  assert_eq!(first, attachment.export_payload(true));
}

#[test]
fn test_boxed_entities_clone_deeply() {
  let attachment = Attachment::create_from_payload(&payload(json!({
    "roles": [{ "role": "owner" }]
  })))
  .unwrap();
  let mut copy = attachment.clone();
  copy.fill_from_payload(&payload(json!({ "roles": [{ "role": "guest" }] }))).unwrap();

  assert_eq!(attachment.record().many::<Role>("roles").count(), 1);
  assert_eq!(copy.record().many::<Role>("roles").count(), 2);
}

#[test]
fn test_create_all_builds_each_element() {
  let roles: Vec<Role> =
    create_all("roles", &json!([{ "role": "owner" }, { "role": "cohost" }])).unwrap();
  assert_eq!(roles[1].record().get_str("role"), Some("cohost"));
  assert!(create_all::<Role>("roles", &json!({ "role": "owner" })).is_err());
}

#[test]
fn test_marshal_reports_entity_name() {
  let role = Role::create_from_payload(&payload(json!({ "role": "guest" }))).unwrap();
  let boxed: Box<dyn Marshal> = Box::new(role);
  assert_eq!(boxed.entity_name(), "Role");
  assert_eq!(boxed.export(true)["role"], json!("guest"));
}
