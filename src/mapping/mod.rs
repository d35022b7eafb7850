//! Schema-driven mapping between entities and grouped XML documents

pub mod entity;
pub mod mapper;
pub mod schema;
pub mod value;

pub use entity::Entity;
pub use mapper::{coerce, deserialize, from_element, serialize, to_element};
pub use schema::{FieldGroup, FieldSchema, LIST_DELIMITER};
pub use value::{FieldValue, parse_date, to_timestamp};
