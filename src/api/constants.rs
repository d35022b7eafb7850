//! API constants for the ONTRAPORT legacy XML API

/// Default API host
pub const DEFAULT_API_BASE_URL: &str = "https://api.ontraport.com/";

/// Contacts endpoint, relative to the base URL
pub const CONTACTS_ENDPOINT: &str = "cdata.php";

/// Form parameter names
pub mod params {
    pub const APP_ID: &str = "appid";
    pub const KEY: &str = "key";
    pub const REQ_TYPE: &str = "reqType";
    pub const RETURN_ID: &str = "return_id";
    pub const DATA: &str = "data";
    pub const FORCE_ADD: &str = "f_add";
}

/// Placeholder substituted for credentials in logs
pub const REDACTED: &str = "XXX";

/// Literal body the API sends for a successful delete
pub const SUCCESS_LITERAL: &str = "Success";

/// Direct child of the response root carrying a server error message
pub const ERROR_TAG: &str = "error";

/// User agent sent by the HTTP transport
pub const USER_AGENT: &str = "ontraport-cli/0.1";

/// Build the full URL for an endpoint, joining with exactly one `/`
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
