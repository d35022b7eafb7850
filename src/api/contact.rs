//! Contact resource: field table and contact-specific operations

use log::info;

use super::client::OntraportClient;
use super::constants::CONTACTS_ENDPOINT;
use super::request::Request;
use super::resource::{Create, Delete, Resource, Retrieve, Update, require_id};
use super::response::{self, ApiResponse, NamedItem};
use super::transport::Transport;
use crate::error::Result;
use crate::mapping::schema::{FIELD_TAG, GROUP_TAG, ID_ATTR, NAME_ATTR};
use crate::mapping::{Entity, FieldGroup, FieldSchema, FieldValue, LIST_DELIMITER, to_timestamp};
use crate::wire::{self, Element};

pub const CONTACT_TAG: &str = "contact";
pub const CONTACT_ID_TAG: &str = "contact_id";

pub const SEQUENCES_GROUP: &str = "Sequences and Tags";
pub const SEQUENCES_FIELD: &str = "Sequences";

/// Request types specific to contacts
pub mod req_types {
    pub const ADD: &str = "add";
    pub const FETCH_NOTES: &str = "fetch_notes";
    pub const FETCH_SEQUENCES: &str = "fetch_sequences";
    pub const PULL_TAG: &str = "pull_tag";
    pub const FETCH_TAG: &str = "fetch_tag";
    pub const ADD_TAG: &str = "add_tag";
    pub const REMOVE_TAG: &str = "remove_tag";
    pub const GET_DELETED: &str = "get_deletedcontacts";
}

pub const CONTACT_SCHEMA: FieldSchema = FieldSchema {
    outer_tag: CONTACT_TAG,
    groups: &[
        FieldGroup {
            name: "Contact Information",
            fields: &[
                ("first_name", "First Name"),
                ("last_name", "Last Name"),
                ("email", "Email"),
                ("address", "Address"),
                ("address_2", "Address 2"),
                ("birthday", "Birthday"),
                ("city", "City"),
                ("company", "Company"),
                ("country", "Country"),
                ("skype", "Skype"),
                ("best_time_to_contact", "Best time to contact"),
                ("fax", "Fax"),
                ("name", "Name"),
                ("office_phone", "Office Phone"),
                ("sms_number", "SMS Number"),
                ("state", "State"),
                ("title", "Title"),
                ("website", "Website"),
                ("zip_code", "Zip Code"),
            ],
        },
        FieldGroup {
            name: SEQUENCES_GROUP,
            fields: &[("tags", "Contact Tags"), ("sequences", SEQUENCES_FIELD)],
        },
        FieldGroup {
            name: "System Information",
            fields: &[
                ("date_added", "Date Added"),
                ("last_activity", "Last Activity"),
                ("date_modified", "Date Modified"),
                ("contact_id", "Contact ID"),
                ("spent", "Spent"),
            ],
        },
    ],
    date_fields: &["birthday", "date_added", "last_activity", "date_modified"],
};

/// Marker type for the contact resource
#[derive(Debug, Clone, Copy)]
pub struct Contact;

impl Resource for Contact {
    const ENDPOINT: &'static str = CONTACTS_ENDPOINT;
    const SCHEMA: &'static FieldSchema = &CONTACT_SCHEMA;
}

impl Create for Contact {
    const CREATE_REQ_TYPE: &'static str = req_types::ADD;
}

impl Retrieve for Contact {
    const FETCH_ID_TAG: &'static str = CONTACT_ID_TAG;
}

impl Update for Contact {}

impl Delete for Contact {
    const DELETE_ID_TAG: &'static str = CONTACT_ID_TAG;
}

/// Contact operations bound to a client
#[derive(Debug)]
pub struct Contacts<'a, T> {
    client: &'a OntraportClient<T>,
}

fn to_xml(element: &Element) -> Result<String> {
    Ok(element.to_xml()?)
}

fn id_list<S: AsRef<str>>(ids: &[S]) -> Vec<Element> {
    ids.iter()
        .map(|id| Element::new(CONTACT_ID_TAG).with_text(id.as_ref()))
        .collect()
}

impl<'a, T: Transport> Contacts<'a, T> {
    pub fn new(client: &'a OntraportClient<T>) -> Self {
        Self { client }
    }

    fn send(&self, request: Request) -> Result<ApiResponse> {
        self.client.send(Contact::ENDPOINT, request)
    }

    pub fn create(&self, entity: &Entity) -> Result<Option<Entity>> {
        self.client.create::<Contact>(entity, false)
    }

    pub fn force_create(&self, entity: &Entity) -> Result<Option<Entity>> {
        self.client.force_create::<Contact>(entity)
    }

    pub fn retrieve(&self, id: &str) -> Result<Option<Entity>> {
        self.client.retrieve::<Contact>(id)
    }

    pub fn update(&self, entity: &Entity) -> Result<Option<Entity>> {
        self.client.update::<Contact>(entity)
    }

    pub fn delete(&self, entity: &Entity) -> Result<bool> {
        self.client.delete::<Contact>(entity)
    }

    /// Notes payload for one contact; returned unparsed
    pub fn fetch_notes(&self, contact: &Entity) -> Result<ApiResponse> {
        let id = require_id(contact, "fetch notes")?;
        self.fetch_all_notes(&[id])
    }

    /// Notes payload for several contacts in one request
    pub fn fetch_all_notes<S: AsRef<str>>(&self, ids: &[S]) -> Result<ApiResponse> {
        let data = wire::concat(&id_list(ids))?;
        self.send(Request::new(req_types::FETCH_NOTES).with_data(data))
    }

    /// All sequences defined in the account
    pub fn fetch_sequences(&self) -> Result<Vec<NamedItem>> {
        let resp = self.send(Request::new(req_types::FETCH_SEQUENCES))?;
        Ok(response::parse_named_items(&resp.root, "sequence"))
    }

    /// Tag names in use
    pub fn pull_tags(&self) -> Result<Vec<String>> {
        let resp = self.send(Request::new(req_types::PULL_TAG))?;
        Ok(response::parse_names(&resp.root, "tag"))
    }

    /// Tags with their ids
    pub fn fetch_tags(&self) -> Result<Vec<NamedItem>> {
        let resp = self.send(Request::new(req_types::FETCH_TAG))?;
        Ok(response::parse_named_items(&resp.root, "tag"))
    }

    pub fn add_sequences<S: AsRef<str>>(&self, contact: &Entity, sequence_ids: &[S]) -> Result<Option<Entity>> {
        self.update_sequences(contact, sequence_ids, false)
    }

    pub fn remove_sequences<S: AsRef<str>>(&self, contact: &Entity, sequence_ids: &[S]) -> Result<Option<Entity>> {
        self.update_sequences(contact, sequence_ids, true)
    }

    fn update_sequences<S: AsRef<str>>(
        &self,
        contact: &Entity,
        sequence_ids: &[S],
        remove: bool,
    ) -> Result<Option<Entity>> {
        let id = require_id(contact, "update sequences")?;

        let joined = sequence_ids
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(LIST_DELIMITER);
        let mut field = Element::new(FIELD_TAG)
            .with_attr(NAME_ATTR, SEQUENCES_FIELD)
            .with_text(joined);
        if remove {
            field.set_attr("action", "remove");
        }

        let doc = Element::new(CONTACT_TAG).with_attr(ID_ATTR, id).with_child(
            Element::new(GROUP_TAG)
                .with_attr(NAME_ATTR, SEQUENCES_GROUP)
                .with_child(field),
        );

        let resp = self.send(Request::new(Contact::UPDATE_REQ_TYPE).with_data(to_xml(&doc)?))?;
        info!("Updated sequences for contact {}", id);
        Ok(crate::mapping::from_element(&resp.root, Contact::SCHEMA, Some(&resp.body)))
    }

    pub fn add_tags<S: AsRef<str>>(&self, contact: &Entity, tags: &[S]) -> Result<ApiResponse> {
        self.send_tags(req_types::ADD_TAG, contact, tags)
    }

    pub fn remove_tags<S: AsRef<str>>(&self, contact: &Entity, tags: &[S]) -> Result<ApiResponse> {
        self.send_tags(req_types::REMOVE_TAG, contact, tags)
    }

    fn send_tags<S: AsRef<str>>(&self, req_type: &str, contact: &Entity, tags: &[S]) -> Result<ApiResponse> {
        let id = require_id(contact, req_type)?;
        let mut doc = Element::new(CONTACT_TAG).with_attr(ID_ATTR, id);
        for tag in tags {
            doc.push_child(Element::new("tag").with_text(tag.as_ref()));
        }
        self.send(Request::new(req_type).with_data(to_xml(&doc)?))
    }

    /// Contacts deleted between two dates; the payload is returned as validated
    pub fn get_deleted(&self, start: impl Into<FieldValue>, end: impl Into<FieldValue>) -> Result<ApiResponse> {
        let bounds = [
            Element::new("dateStart").with_text(to_timestamp(&start.into())),
            Element::new("dateEnd").with_text(to_timestamp(&end.into())),
        ];
        let data = wire::concat(&bounds)?;
        self.send(Request::new(req_types::GET_DELETED).with_data(data))
    }
}
