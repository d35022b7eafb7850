//! ONTRAPORT legacy API
//!
//! Request construction, transport, response validation and the resource
//! operations built on the mapping layer.

pub mod client;
pub mod constants;
pub mod contact;
pub mod request;
pub mod resource;
pub mod response;
pub mod transport;

pub use client::OntraportClient;
pub use contact::{CONTACT_SCHEMA, Contact, Contacts};
pub use request::{EchoLevel, Request};
pub use resource::{Create, Delete, Resource, Retrieve, Update};
pub use response::{ApiResponse, NamedItem};
pub use transport::{HttpTransport, RawResponse, Transport};
