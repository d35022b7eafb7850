//! Client for the ONTRAPORT legacy XML API
//!
//! Entities are plain attribute maps translated to and from the API's
//! grouped XML documents by a declarative [`mapping::FieldSchema`].

pub mod api;
pub mod config;
pub mod error;
pub mod mapping;
pub mod wire;

pub use api::{Contact, OntraportClient, Transport};
pub use config::Config;
pub use error::{Error, Result};
pub use mapping::{Entity, FieldValue};
