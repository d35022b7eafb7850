use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::constants::{self, DEFAULT_API_BASE_URL};
use crate::api::request::EchoLevel;
use crate::error::{Error, Result};

pub const ENV_APP_ID: &str = "ONTRAPORT_APP_ID";
pub const ENV_API_KEY: &str = "ONTRAPORT_API_KEY";
pub const ENV_API_BASE_URL: &str = "ONTRAPORT_API_BASE_URL";

/// Connection settings read once at startup and injected into the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub echo_level: EchoLevel,
}

/// Credentials validated to be present and non-empty
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &constants::REDACTED)
            .field("api_key", &constants::REDACTED)
            .finish()
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            app_id: None,
            api_key: None,
            echo_level: EchoLevel::default(),
        }
    }
}

impl Config {
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_echo_level(mut self, level: EchoLevel) -> Self {
        self.echo_level = level;
        self
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .ok_or_else(|| Error::Config("Failed to get XDG config directory".to_string()))?
                .join("ontraport")
        } else {
            dirs::home_dir()
                .ok_or_else(|| Error::Config("Failed to get home directory".to_string()))?
                .join(".ontraport")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load `.env`, the config file (if any) and environment overrides
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    /// Read a TOML config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| Error::Config(format!("Failed to create config directory {:?}: {}", dir, e)))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config to TOML: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file {:?}: {}", path, e)))?;

        info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(app_id) = lookup(ENV_APP_ID) {
            self.app_id = Some(app_id);
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
    }

    /// Credentials for a request; fails before any network call when unset
    pub fn credentials(&self) -> Result<Credentials> {
        let app_id = self
            .app_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Configuration("You must specify APP ID.".to_string()))?;
        let api_key = self
            .api_key
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Configuration("You must specify API Key.".to_string()))?;

        Ok(Credentials {
            app_id: app_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        constants::endpoint_url(&self.api_base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.ontraport.com/");
        assert_eq!(config.echo_level, EchoLevel::FullRecord);
        assert_eq!(config.endpoint_url("cdata.php"), "https://api.ontraport.com/cdata.php");
    }

    #[test]
    fn test_credentials_gate() {
        let err = Config::default().credentials().unwrap_err();
        assert!(err.is_configuration());

        let mut config = Config::default();
        config.app_id = Some("app".to_string());
        config.api_key = Some(String::new());
        assert!(matches!(config.credentials(), Err(Error::Configuration(msg)) if msg.contains("API Key")));

        let creds = Config::new("app", "key").credentials().unwrap();
        assert_eq!(creds.app_id, "app");
        assert_eq!(creds.api_key, "key");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Config::new("app", "super-secret").credentials().unwrap();
        assert!(!format!("{:?}", creds).contains("super-secret"));
    }

    #[test]
    fn test_toml_parsing() {
        let config = Config::from_toml_str(
            r#"
            app_id = "2_1234_abcd"
            api_key = "k3y"
            echo_level = "id_and_modified"
            "#,
        )
        .unwrap();

        assert_eq!(config.app_id.as_deref(), Some("2_1234_abcd"));
        assert_eq!(config.echo_level, EchoLevel::IdAndModified);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_APP_ID, "env-app"),
            (ENV_API_BASE_URL, "http://localhost:8080"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::new("file-app", "file-key");
        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.app_id.as_deref(), Some("env-app"));
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.endpoint_url("cdata.php"), "http://localhost:8080/cdata.php");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::new("app", "key")
            .with_base_url("http://example.test/")
            .save_to(&path)
            .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.app_id.as_deref(), Some("app"));
        assert_eq!(loaded.api_base_url, "http://example.test/");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.app_id.is_none());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "app_id = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
