//! In-memory representation of one remote record

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::value::FieldValue;

/// One remote record: an optional identifier plus named attribute values.
///
/// `raw_response` keeps the payload that produced the entity, for
/// diagnostics only; it is not part of the semantic attributes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: BTreeMap<String, FieldValue>,
    #[serde(skip)]
    pub raw_response: Option<String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder form of [`Entity::set`]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<FieldValue>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&FieldValue> {
        self.attributes.get(attribute)
    }

    pub fn remove(&mut self, attribute: &str) -> Option<FieldValue> {
        self.attributes.remove(attribute)
    }

    pub fn text(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).and_then(FieldValue::as_text)
    }

    /// List value; a single text value is returned as a one-element list
    pub fn list(&self, attribute: &str) -> Option<Vec<String>> {
        match self.get(attribute)? {
            FieldValue::List(items) => Some(items.clone()),
            FieldValue::Text(s) => Some(vec![s.clone()]),
            FieldValue::Date(_) => None,
        }
    }

    pub fn date(&self, attribute: &str) -> Option<&DateTime<Utc>> {
        self.get(attribute).and_then(FieldValue::as_date)
    }

    pub fn raw_response(&self) -> Option<&str> {
        self.raw_response.as_deref()
    }

    /// Entities are equal when identifier and attributes match
    pub fn same_record(&self, other: &Entity) -> bool {
        self.id == other.id && self.attributes == other.attributes
    }
}

impl<K, V> FromIterator<(K, V)> for Entity
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entity = Entity::new();
        for (k, v) in iter {
            entity.set(k, v);
        }
        entity
    }
}
