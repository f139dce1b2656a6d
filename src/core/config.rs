//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. It is built once at
//! startup and shared read-only with every tool invocation.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Vault API base URL.
pub const DEFAULT_BASE_URL: &str = "https://unify.apideck.com";

/// Default timeout for a single Vault API request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Vault API endpoint and credentials.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Settings used to reach the Vault API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// API key, sent as the `code`, `redirect_uri`, `scope` and `state`
    /// credential parameters.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Token sent as `x-apideck-downstream-authorization`.
    #[serde(default, skip_serializing)]
    pub bearer_token: Option<String>,

    /// Timeout for a single request, in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            bearer_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Create an API configuration pointing at `base_url` with no credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the API key. Empty keys are treated as unset.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = non_empty(api_key.into());
        self
    }

    /// Set the bearer token. Empty tokens are treated as unset.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = non_empty(token.into());
        self
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid base URL '{}': {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("request timeout must be at least one second"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "vault-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_VAULT_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_VAULT_BASE_URL") {
            config.api.base_url = base_url;
        }

        config.api.api_key = std::env::var("MCP_VAULT_API_KEY").ok().and_then(non_empty);
        if config.api.api_key.is_some() {
            info!("Vault API key loaded from environment");
        } else {
            warn!("MCP_VAULT_API_KEY not set - requests will be sent without an API key");
        }

        config.api.bearer_token = std::env::var("MCP_VAULT_BEARER_TOKEN")
            .ok()
            .and_then(non_empty);

        if let Ok(timeout) = std::env::var("MCP_VAULT_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_VAULT_TIMEOUT_SECS '{}', using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_vault_env() {
        unsafe {
            std::env::remove_var("MCP_VAULT_BASE_URL");
            std::env::remove_var("MCP_VAULT_API_KEY");
            std::env::remove_var("MCP_VAULT_BEARER_TOKEN");
            std::env::remove_var("MCP_VAULT_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_api_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_VAULT_BASE_URL", "http://localhost:9999");
            std::env::set_var("MCP_VAULT_API_KEY", "test_key_12345");
            std::env::set_var("MCP_VAULT_BEARER_TOKEN", "downstream-token");
            std::env::set_var("MCP_VAULT_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, "http://localhost:9999");
        assert_eq!(config.api.api_key.as_deref(), Some("test_key_12345"));
        assert_eq!(config.api.bearer_token.as_deref(), Some("downstream-token"));
        assert_eq!(config.api.timeout_secs, 5);
        clear_vault_env();
    }

    #[test]
    fn test_empty_credentials_are_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_VAULT_API_KEY", "");
            std::env::set_var("MCP_VAULT_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert!(config.api.api_key.is_none());
        assert!(config.api.bearer_token.is_none());
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        clear_vault_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let api = ApiConfig::default()
            .with_api_key("super_secret_key")
            .with_bearer_token("super_secret_token");
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(debug_str.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_credentials_not_serialized() {
        let mut config = Config::default();
        config.api = ApiConfig::default()
            .with_api_key("super_secret_key")
            .with_bearer_token("super_secret_token");

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super_secret"));
        assert!(!json.contains("api_key"));
        assert!(json.contains(DEFAULT_BASE_URL));

        let restored: ApiConfig =
            serde_json::from_value(serde_json::to_value(&config.api).unwrap()).unwrap();
        assert!(restored.api_key.is_none());
        assert!(restored.bearer_token.is_none());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(ApiConfig::default().validate().is_ok());
        assert!(ApiConfig::new("http://127.0.0.1:8080/").validate().is_ok());
        assert!(ApiConfig::new("not a url").validate().is_err());
        assert!(ApiConfig::new("ftp://example.com").validate().is_err());

        let mut no_timeout = ApiConfig::default();
        no_timeout.timeout_secs = 0;
        assert!(matches!(no_timeout.validate(), Err(Error::Config(_))));
    }
}
