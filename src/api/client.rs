use log::{debug, info};

use super::contact::Contacts;
use super::request::{Request, redacted};
use super::response::{self, ApiResponse};
use super::transport::{HttpTransport, RawResponse, Transport};
use crate::config::Config;
use crate::error::Result;

/// ONTRAPORT API client: injected configuration plus a transport.
///
/// Every call performs exactly one blocking round trip. Credentials are
/// checked before the transport is touched.
#[derive(Debug, Clone)]
pub struct OntraportClient<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl OntraportClient<HttpTransport> {
    /// Client backed by the default HTTP transport
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self::new(config, HttpTransport::new()?))
    }
}

impl<T: Transport> OntraportClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Contact resource operations
    pub fn contacts(&self) -> Contacts<'_, T> {
        Contacts::new(self)
    }

    /// Send a request and return the raw response without inspecting the body.
    ///
    /// The status code is not checked either; callers decide what a
    /// successful body looks like.
    pub fn send_unvalidated(&self, endpoint: &str, request: Request) -> Result<RawResponse> {
        let credentials = self.config.credentials()?;
        let url = self.config.endpoint_url(endpoint);

        info!("Sending {} request to {}", request.req_type, url);
        let form = request.into_params(&credentials, self.config.echo_level);
        debug!("request params: {:?}", redacted(&form));

        self.transport.send(&url, &form)
    }

    /// Send a request and validate the response
    pub fn send(&self, endpoint: &str, request: Request) -> Result<ApiResponse> {
        let raw = self.send_unvalidated(endpoint, request)?;
        let root = response::validate(raw.status, &raw.body)?;
        Ok(ApiResponse {
            status: raw.status,
            body: raw.body,
            root,
        })
    }
}
