//! Response validation
//!
//! A response is a failure when the status is not 200, when the body is not
//! a well-formed document, or when the root holds a direct `<error>` child.

use log::debug;
use serde::Serialize;

use super::constants::{ERROR_TAG, SUCCESS_LITERAL};
use crate::error::{Error, Result};
use crate::wire::{self, Element};

/// A validated response: raw body plus its parsed tree
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    pub root: Element,
}

/// An `(id, name)` pair from list-shaped responses (sequences, tags)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedItem {
    pub id: Option<String>,
    pub name: String,
}

/// Non-200 is a transport failure; the body is logged but not parsed
pub fn check_status(status: u16, body: &str) -> Result<()> {
    if status != 200 {
        debug!("response body: {}", body);
        return Err(Error::Transport { status });
    }
    Ok(())
}

/// Validate status and body, returning the parsed root on success
pub fn validate(status: u16, body: &str) -> Result<Element> {
    check_status(status, body)?;

    let root = wire::parse(body).map_err(|e| {
        debug!("response xml: {}", body);
        debug!("{}", e);
        Error::Protocol(body.to_string())
    })?;

    check_error_element(&root, body)?;
    Ok(root)
}

/// Raise the server-supplied message if the root carries an `<error>` child
pub fn check_error_element(root: &Element, body: &str) -> Result<()> {
    if let Some(error) = root.child(ERROR_TAG) {
        debug!("response xml: {}", body);
        return Err(Error::Protocol(error.trimmed_text().to_string()));
    }
    Ok(())
}

/// Delete succeeds only on an exact `Success` body; the API also reports
/// this for ids that do not exist.
pub fn is_delete_success(body: &str) -> bool {
    body == SUCCESS_LITERAL
}

/// Children tagged `tag` as `(id attribute, trimmed text)` pairs
pub fn parse_named_items(root: &Element, tag: &str) -> Vec<NamedItem> {
    root.children_named(tag)
        .map(|el| NamedItem {
            id: el.attr("id").map(str::to_string),
            name: el.trimmed_text().to_string(),
        })
        .filter(|item| !item.name.is_empty())
        .collect()
}

/// Trimmed text of children tagged `tag`
pub fn parse_names(root: &Element, tag: &str) -> Vec<String> {
    root.children_named(tag)
        .map(|el| el.trimmed_text().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_200_is_transport_error() {
        let err = validate(503, "<result/>").unwrap_err();
        assert!(matches!(err, Error::Transport { status: 503 }));
    }

    #[test]
    fn test_non_200_body_is_not_parsed() {
        assert!(matches!(check_status(500, "<unclosed"), Err(Error::Transport { status: 500 })));
        assert!(check_status(200, "<unclosed").is_ok());
    }

    #[test]
    fn test_unparseable_body_carries_raw_body() {
        let err = validate(200, "<html><body>oops").unwrap_err();
        assert!(matches!(err, Error::Protocol(body) if body == "<html><body>oops"));
    }

    #[test]
    fn test_error_element_message_is_trimmed() {
        let err = validate(200, "<result><error>  Invalid key  </error></result>").unwrap_err();
        assert!(matches!(err, Error::Protocol(msg) if msg == "Invalid key"));
    }

    #[test]
    fn test_nested_error_is_not_detected() {
        let root = validate(200, "<result><contact><error>x</error></contact></result>").unwrap();
        assert_eq!(root.name, "result");
    }

    #[test]
    fn test_delete_literal() {
        assert!(is_delete_success("Success"));
        assert!(!is_delete_success("Success "));
        assert!(!is_delete_success("<result>Success</result>"));
        assert!(!is_delete_success("Failure"));
    }

    #[test]
    fn test_list_parsing() {
        let root = validate(
            200,
            r#"<result><sequence id="1">Welcome</sequence><sequence id="2"> Follow up </sequence><tag>vip</tag><tag> </tag></result>"#,
        )
        .unwrap();

        assert_eq!(
            parse_named_items(&root, "sequence"),
            vec![
                NamedItem { id: Some("1".into()), name: "Welcome".into() },
                NamedItem { id: Some("2".into()), name: "Follow up".into() },
            ]
        );
        assert_eq!(parse_names(&root, "tag"), vec!["vip".to_string()]);
    }
}
