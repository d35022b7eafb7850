//! Outgoing request construction

use std::fmt;

use super::constants::{REDACTED, params};
use crate::config::Credentials;

/// How much of the affected record the server echoes back (`return_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoLevel {
    /// Full record(s) in addition to the Success/Failure message
    #[default]
    FullRecord,
    /// Record id and date last modified only
    IdAndModified,
}

impl EchoLevel {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::FullRecord => "1",
            Self::IdAndModified => "2",
        }
    }
}

impl fmt::Display for EchoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// One operation request, before credentials are injected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub req_type: String,
    pub data: Option<String>,
    pub echo_level: Option<EchoLevel>,
    pub force_add: bool,
}

impl Request {
    pub fn new(req_type: impl Into<String>) -> Self {
        Self {
            req_type: req_type.into(),
            data: None,
            echo_level: None,
            force_add: false,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_echo_level(mut self, level: EchoLevel) -> Self {
        self.echo_level = Some(level);
        self
    }

    pub fn with_force_add(mut self, force: bool) -> Self {
        self.force_add = force;
        self
    }

    /// Form parameters in wire order: appid, key, reqType, return_id, [data], [f_add]
    pub fn into_params(self, credentials: &Credentials, default_echo: EchoLevel) -> Vec<(String, String)> {
        let echo = self.echo_level.unwrap_or(default_echo);

        let mut form = vec![
            (params::APP_ID.to_string(), credentials.app_id.clone()),
            (params::KEY.to_string(), credentials.api_key.clone()),
            (params::REQ_TYPE.to_string(), self.req_type),
            (params::RETURN_ID.to_string(), echo.as_param().to_string()),
        ];
        if let Some(data) = self.data {
            form.push((params::DATA.to_string(), data));
        }
        if self.force_add {
            // Observed to have no effect server-side; sent as an empty flag
            form.push((params::FORCE_ADD.to_string(), String::new()));
        }
        form
    }
}

/// Copy of the form parameters with credentials replaced by a placeholder
pub fn redacted(form: &[(String, String)]) -> Vec<(String, String)> {
    form.iter()
        .map(|(k, v)| {
            if k == params::APP_ID || k == params::KEY {
                (k.clone(), REDACTED.to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}
