//! XML wire documents
//!
//! Parsing goes through `roxmltree` and is converted into an owned [`Element`]
//! tree so callers can keep the result after the input buffer is dropped.
//! Serialization goes through `quick-xml`.

pub mod element;

pub use element::Element;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to parse XML: {0}")]
    Parse(String),

    #[error("failed to write XML: {0}")]
    Write(String),
}

/// Parse a document into an owned element tree rooted at the document element
pub fn parse(xml: &str) -> Result<Element, WireError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| WireError::Parse(e.to_string()))?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element.attributes.push((attr.name().to_string(), attr.value().to_string()));
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            element.children.push(convert(child));
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }
    if !text.is_empty() {
        element.text = Some(text);
    }

    element
}

/// Serialize sibling fragments back to back, as some request payloads require
pub fn concat(elements: &[Element]) -> Result<String, WireError> {
    let mut out = String::new();
    for element in elements {
        out.push_str(&element.to_xml()?);
    }
    Ok(out)
}
