//! Declarative field schemas
//!
//! A schema maps semantic attribute names (`first_name`) to the wire field
//! names the API uses (`First Name`), bundled into the named groups the
//! remote UI shows. Schemas are `'static` tables defined once per resource.

/// Separator joining list members inside a single field's text
pub const LIST_DELIMITER: &str = "*/*";

/// Tag of group container elements
pub const GROUP_TAG: &str = "Group_Tag";

/// Tag of field elements inside a group
pub const FIELD_TAG: &str = "field";

/// Attribute carrying the group or field name
pub const NAME_ATTR: &str = "name";

/// Attribute carrying the record identifier on the root element
pub const ID_ATTR: &str = "id";

/// One named group of `(attribute, wire_name)` pairs
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub name: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

impl FieldGroup {
    /// Reverse lookup: semantic attribute for a wire field name
    pub fn attribute_for(&self, wire_name: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(_, wire)| *wire == wire_name)
            .map(|(attr, _)| *attr)
    }

    pub fn wire_name_for(&self, attribute: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(attr, _)| *attr == attribute)
            .map(|(_, wire)| *wire)
    }
}

/// Full mapping for one entity type
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Root tag of a serialized entity (e.g. `contact`)
    pub outer_tag: &'static str,
    pub groups: &'static [FieldGroup],
    /// Attributes coerced to and from dates
    pub date_fields: &'static [&'static str],
}

impl FieldSchema {
    pub fn group(&self, name: &str) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Group that declares the attribute
    pub fn group_for(&self, attribute: &str) -> Option<&FieldGroup> {
        self.groups
            .iter()
            .find(|g| g.wire_name_for(attribute).is_some())
    }

    pub fn wire_name_for(&self, attribute: &str) -> Option<&'static str> {
        self.groups.iter().find_map(|g| g.wire_name_for(attribute))
    }

    pub fn is_date_field(&self, attribute: &str) -> bool {
        self.date_fields.contains(&attribute)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.wire_name_for(attribute).is_some()
    }

    /// Every mapped attribute, in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.fields.iter().map(|(attr, _)| *attr))
    }
}
