//! Resource capabilities
//!
//! A resource type declares its endpoint and field schema through
//! [`Resource`], then opts into operations by implementing the capability
//! traits. The operations themselves live on [`OntraportClient`] and are
//! generic over the capability.

use log::{debug, info};

use super::client::OntraportClient;
use super::request::Request;
use super::response;
use super::transport::Transport;
use crate::error::{Error, Result};
use crate::mapping::{self, Entity, FieldSchema};
use crate::wire::{self, Element};

pub trait Resource {
    /// Endpoint path relative to the API base URL
    const ENDPOINT: &'static str;
    const SCHEMA: &'static FieldSchema;
}

pub trait Create: Resource {
    const CREATE_REQ_TYPE: &'static str;
}

pub trait Retrieve: Resource {
    const FETCH_REQ_TYPE: &'static str = "fetch";
    /// Element wrapping the identifier in fetch requests
    const FETCH_ID_TAG: &'static str;
}

pub trait Update: Resource {
    const UPDATE_REQ_TYPE: &'static str = "update";
}

pub trait Delete: Resource {
    const DELETE_REQ_TYPE: &'static str = "delete";
    const DELETE_ID_TAG: &'static str;
}

/// Serialize `<tag>id</tag>`
pub(crate) fn id_payload(tag: &str, id: &str) -> Result<String> {
    Ok(Element::new(tag).with_text(id).to_xml()?)
}

pub(crate) fn require_id<'e>(entity: &'e Entity, operation: &str) -> Result<&'e str> {
    entity
        .id()
        .ok_or_else(|| Error::Precondition(format!("id is not set; cannot {}", operation)))
}

impl<T: Transport> OntraportClient<T> {
    /// Create a record from the entity's attributes.
    ///
    /// `force_create` sends the `f_add` flag; the server has not been seen to
    /// honour it, so a matching record may still be updated instead.
    pub fn create<R: Create>(&self, entity: &Entity, force_create: bool) -> Result<Option<Entity>> {
        let data = mapping::serialize(entity, R::SCHEMA)?;
        let request = Request::new(R::CREATE_REQ_TYPE)
            .with_data(data)
            .with_force_add(force_create);

        let resp = self.send(R::ENDPOINT, request)?;
        let created = mapping::from_element(&resp.root, R::SCHEMA, Some(&resp.body));
        if let Some(id) = created.as_ref().and_then(Entity::id) {
            info!("Created {} {}", R::SCHEMA.outer_tag, id);
        }
        Ok(created)
    }

    pub fn force_create<R: Create>(&self, entity: &Entity) -> Result<Option<Entity>> {
        self.create::<R>(entity, true)
    }

    /// Fetch one record by id; `None` when the server returns no record
    pub fn retrieve<R: Retrieve>(&self, id: &str) -> Result<Option<Entity>> {
        let data = id_payload(R::FETCH_ID_TAG, id)?;
        let resp = self.send(R::ENDPOINT, Request::new(R::FETCH_REQ_TYPE).with_data(data))?;
        Ok(mapping::from_element(&resp.root, R::SCHEMA, Some(&resp.body)))
    }

    /// Send the entity's mapped attributes as an update of the record it identifies
    pub fn update<R: Update>(&self, entity: &Entity) -> Result<Option<Entity>> {
        require_id(entity, "update")?;
        let data = mapping::serialize(entity, R::SCHEMA)?;
        let resp = self.send(R::ENDPOINT, Request::new(R::UPDATE_REQ_TYPE).with_data(data))?;
        Ok(mapping::from_element(&resp.root, R::SCHEMA, Some(&resp.body)))
    }

    /// Delete the record the entity identifies.
    ///
    /// Returns `true` only for an exact `Success` body. An `<error>` element
    /// in a well-formed body is still raised as a protocol error.
    pub fn delete<R: Delete>(&self, entity: &Entity) -> Result<bool> {
        let id = require_id(entity, "delete")?;
        let data = id_payload(R::DELETE_ID_TAG, id)?;

        let raw = self.send_unvalidated(R::ENDPOINT, Request::new(R::DELETE_REQ_TYPE).with_data(data))?;
        response::check_status(raw.status, &raw.body)?;

        if response::is_delete_success(&raw.body) {
            info!("Deleted {} {}", R::SCHEMA.outer_tag, id);
            return Ok(true);
        }

        if let Ok(root) = wire::parse(&raw.body) {
            response::check_error_element(&root, &raw.body)?;
        }
        debug!("delete response: {}", raw.body);
        Ok(false)
    }
}
