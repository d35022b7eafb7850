//! Transport adapter: one blocking form POST per call

use log::debug;
use std::time::Duration;

use super::constants::USER_AGENT;
use crate::error::Result;

/// Status code and body exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends form-encoded parameters to a URL and returns the raw response.
///
/// Implementations own connection handling and timeouts.
pub trait Transport {
    fn send(&self, url: &str, form: &[(String, String)]) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, url: &str, form: &[(String, String)]) -> Result<RawResponse> {
        (**self).send(url, form)
    }
}

/// `reqwest` blocking client with connection pooling
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http_client })
    }

    pub fn with_client(http_client: reqwest::blocking::Client) -> Self {
        Self { http_client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str, form: &[(String, String)]) -> Result<RawResponse> {
        let response = self.http_client.post(url).form(form).send()?;
        let status = response.status().as_u16();
        debug!("Response status: {}", status);
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}
