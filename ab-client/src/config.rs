//! Client configuration

use crate::error::{ClientError, ClientResult};

/// Path prefix shared by every backend resource
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

pub const ENV_BASE_URL: &str = "AB_API_BASE_URL";
pub const ENV_API_PREFIX: &str = "AB_API_PREFIX";
pub const ENV_TOKEN: &str = "AB_API_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "AB_API_TIMEOUT_SECS";

/// Client configuration for connecting to the ABService backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Path prefix appended to `base_url` (e.g., "/api/v1")
    pub api_prefix: String,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            token: None,
            timeout: None,
        }
    }

    /// Build from `AB_API_*` environment variables, defaulting what is unset
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(prefix) = lookup(ENV_API_PREFIX) {
            config.api_prefix = prefix;
        }
        config.token = lookup(ENV_TOKEN).filter(|t| !t.is_empty());
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got {raw:?}"))
            })?;
            config.timeout = Some(secs);
        }

        Ok(config)
    }

    /// Set the API path prefix
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// `{base_url}{api_prefix}` without a trailing slash
    pub fn api_base(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
