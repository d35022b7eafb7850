//! Recording transport for exercising the client without a network

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use ontraport::api::{RawResponse, Transport};
use ontraport::{Config, OntraportClient, Result};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub form: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Replays queued responses in order and records every request
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<RawResponse>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(RawResponse::new(status, body));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, url: &str, form: &[(String, String)]) -> Result<RawResponse> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            form: form.to_vec(),
        });
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(200, "<result/>")))
    }
}

pub fn test_config() -> Config {
    Config::new("app-1", "key-1").with_base_url("https://api.test/")
}

pub fn client(transport: MockTransport) -> OntraportClient<MockTransport> {
    OntraportClient::new(test_config(), transport)
}

/// A create/fetch style response echoing one contact
pub fn contact_response(id: &str, groups: &str) -> String {
    format!(
        "<result><contact id=\"{}\">{}</contact><status>Success</status></result>",
        id, groups
    )
}
