//! Bidirectional translation between [`Entity`] values and grouped wire documents

use log::debug;

use super::entity::Entity;
use super::schema::{FIELD_TAG, FieldSchema, GROUP_TAG, ID_ATTR, LIST_DELIMITER, NAME_ATTR};
use super::value::{FieldValue, parse_date};
use crate::error::{Error, Result};
use crate::wire::{self, Element};

/// Build the wire tree for an entity.
///
/// Attributes absent from the schema are dropped. Empty values produce no
/// field, and groups left without fields are not emitted.
pub fn to_element(entity: &Entity, schema: &FieldSchema) -> Element {
    let mut root = Element::new(schema.outer_tag);
    if let Some(id) = entity.id() {
        root.set_attr(ID_ATTR, id);
    }

    for group in schema.groups {
        let mut group_el = Element::new(GROUP_TAG).with_attr(NAME_ATTR, group.name);

        for (attribute, wire_name) in group.fields {
            let Some(value) = entity.get(attribute) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            group_el.push_child(
                Element::new(FIELD_TAG)
                    .with_attr(NAME_ATTR, *wire_name)
                    .with_text(value.to_wire_text(LIST_DELIMITER)),
            );
        }

        if group_el.has_children() {
            root.push_child(group_el);
        }
    }

    root
}

/// Serialize an entity to its XML text
pub fn serialize(entity: &Entity, schema: &FieldSchema) -> Result<String> {
    Ok(to_element(entity, schema).to_xml()?)
}

/// Convert wire text to an attribute value.
///
/// Date fields that fail to parse keep their raw text. Other values holding
/// the list delimiter become lists of trimmed, non-empty members.
pub fn coerce(attribute: &str, text: &str, schema: &FieldSchema) -> FieldValue {
    if schema.is_date_field(attribute) {
        return match parse_date(text) {
            Some(date) => FieldValue::Date(date),
            None => FieldValue::Text(text.to_string()),
        };
    }

    if text.contains(LIST_DELIMITER) {
        let items = text
            .split(LIST_DELIMITER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        return FieldValue::List(items);
    }

    FieldValue::Text(text.to_string())
}

/// Build an entity from a parsed response.
///
/// The entity element is the root's first child tagged with the schema's
/// outer tag, or the root itself when it carries that tag. Returns `None`
/// when neither is present. Unknown groups and fields are skipped.
pub fn from_element(root: &Element, schema: &FieldSchema, raw: Option<&str>) -> Option<Entity> {
    let record = if root.name == schema.outer_tag {
        root
    } else {
        root.child(schema.outer_tag)?
    };

    let mut entity = Entity::new();
    entity.id = record.attr(ID_ATTR).map(str::to_string);

    for group_el in record.children_named(GROUP_TAG) {
        let Some(group) = group_el.attr(NAME_ATTR).and_then(|name| schema.group(name)) else {
            debug!("skipping unmapped group {:?}", group_el.attr(NAME_ATTR));
            continue;
        };

        for field_el in group_el.children_named(FIELD_TAG) {
            let Some(attribute) = field_el.attr(NAME_ATTR).and_then(|name| group.attribute_for(name)) else {
                continue;
            };
            let Some(text) = field_el.text.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            entity.set(attribute, coerce(attribute, text, schema));
        }
    }

    entity.raw_response = raw.map(str::to_string);
    Some(entity)
}

/// Parse wire text and build an entity from it
pub fn deserialize(xml: &str, schema: &FieldSchema) -> Result<Option<Entity>> {
    let root = wire::parse(xml).map_err(|e| {
        debug!("response xml: {}", xml);
        debug!("{}", e);
        Error::Protocol(xml.to_string())
    })?;
    Ok(from_element(&root, schema, Some(xml)))
}
