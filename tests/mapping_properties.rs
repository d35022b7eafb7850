//! Property-based tests for the contact field mapping.
//!
//! - Round trip: deserialize(serialize(e)) reproduces every mapped, non-empty attribute
//! - Omission: empty values and unmapped attributes never reach the wire
//! - Tolerance: unknown groups and fields in a response are ignored

use chrono::{TimeZone, Utc};
use ontraport::api::CONTACT_SCHEMA;
use ontraport::mapping::{deserialize, serialize};
use ontraport::{Entity, FieldValue};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn text_attributes() -> Vec<&'static str> {
    CONTACT_SCHEMA
        .attributes()
        .filter(|attr| !CONTACT_SCHEMA.is_date_field(attr))
        .collect()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@.][a-zA-Z0-9@. ]{0,30}").unwrap()
}

fn list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z0-9]{1,10}").unwrap(), 2..5)
}

fn value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        text_strategy().prop_map(FieldValue::Text),
        list_strategy().prop_map(FieldValue::List),
    ]
}

fn date_strategy() -> impl Strategy<Value = FieldValue> {
    (-2_000_000_000i64..4_000_000_000).prop_map(|secs| FieldValue::Date(Utc.timestamp_opt(secs, 0).unwrap()))
}

fn entity_strategy() -> impl Strategy<Value = Entity> {
    let attrs = text_attributes();
    let count = attrs.len();
    (
        prop::option::of("[1-9][0-9]{0,6}"),
        prop::sample::subsequence(attrs, 0..=count),
        prop::collection::vec(value_strategy(), count),
        prop::sample::subsequence(CONTACT_SCHEMA.date_fields.to_vec(), 0..=CONTACT_SCHEMA.date_fields.len()),
        prop::collection::vec(date_strategy(), CONTACT_SCHEMA.date_fields.len()),
    )
        .prop_map(|(id, attrs, values, date_attrs, dates)| {
            let mut entity = Entity::new();
            entity.id = id;
            for (attr, value) in attrs.into_iter().zip(values) {
                entity.set(attr, value);
            }
            for (attr, date) in date_attrs.into_iter().zip(dates) {
                entity.set(attr, date);
            }
            entity
        })
}

// =============================================================================
// ROUND TRIP
// =============================================================================

proptest! {
    #[test]
    fn serialize_then_deserialize_preserves_record(entity in entity_strategy()) {
        let xml = serialize(&entity, &CONTACT_SCHEMA).unwrap();
        let parsed = deserialize(&xml, &CONTACT_SCHEMA).unwrap().unwrap();

        prop_assert_eq!(parsed.id(), entity.id());
        prop_assert_eq!(&parsed.attributes, &entity.attributes);
        prop_assert_eq!(parsed.raw_response(), Some(xml.as_str()));
    }

    #[test]
    fn empty_values_are_omitted(entity in entity_strategy(), attr_index in 0usize..8) {
        let attrs = text_attributes();
        let attr = attrs[attr_index % attrs.len()];

        let mut with_empty = entity.clone();
        with_empty.set(attr, "");
        let mut without = entity;
        without.remove(attr);

        prop_assert_eq!(
            serialize(&with_empty, &CONTACT_SCHEMA).unwrap(),
            serialize(&without, &CONTACT_SCHEMA).unwrap()
        );

        with_empty.set(attr, Vec::<String>::new());
        prop_assert_eq!(
            serialize(&with_empty, &CONTACT_SCHEMA).unwrap(),
            serialize(&without, &CONTACT_SCHEMA).unwrap()
        );
    }

    #[test]
    fn unmapped_attributes_are_dropped(entity in entity_strategy(), extra in text_strategy()) {
        let with_extra = entity.clone().with("favorite_color", extra.clone());

        let xml = serialize(&with_extra, &CONTACT_SCHEMA).unwrap();
        prop_assert_eq!(&xml, &serialize(&entity, &CONTACT_SCHEMA).unwrap());
        prop_assert!(!xml.contains("favorite_color"));
    }

    #[test]
    fn every_emitted_group_has_fields(entity in entity_strategy()) {
        let xml = serialize(&entity, &CONTACT_SCHEMA).unwrap();
        let root = ontraport::wire::parse(&xml).unwrap();
        for group in root.children_named("Group_Tag") {
            prop_assert!(group.has_children());
        }
    }
}

// =============================================================================
// RESPONSE TOLERANCE
// =============================================================================

#[test]
fn unknown_groups_and_fields_are_ignored() {
    let xml = "<result><contact id=\"3\">\
               <Group_Tag name=\"Custom Fields\"><field name=\"Shoe Size\">11</field></Group_Tag>\
               <Group_Tag name=\"Contact Information\">\
               <field name=\"Email\">a@b.c</field>\
               <field name=\"Nickname\">Al</field>\
               <field name=\"Fax\"></field>\
               </Group_Tag></contact></result>";

    let parsed = deserialize(xml, &CONTACT_SCHEMA).unwrap().unwrap();
    assert_eq!(parsed.id(), Some("3"));
    assert_eq!(parsed.attributes.len(), 1);
    assert_eq!(parsed.text("email"), Some("a@b.c"));
}

#[test]
fn empty_entity_serializes_to_bare_outer_tag() {
    assert_eq!(serialize(&Entity::new(), &CONTACT_SCHEMA).unwrap(), "<contact/>");
    assert_eq!(
        serialize(&Entity::new().with_id("8"), &CONTACT_SCHEMA).unwrap(),
        "<contact id=\"8\"/>"
    );
}

#[test]
fn pre_epoch_birthday_round_trips_as_date() {
    let birthday = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
    let entity = Entity::new().with_id("1").with("birthday", birthday);

    let xml = serialize(&entity, &CONTACT_SCHEMA).unwrap();
    assert!(xml.contains("<field name=\"Birthday\">-315619200</field>"));

    let parsed = deserialize(&xml, &CONTACT_SCHEMA).unwrap().unwrap();
    assert_eq!(parsed.get("birthday"), Some(&FieldValue::Date(birthday)));
}
