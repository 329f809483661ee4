//! Platform gateway configuration and API namespace selection

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ConfigError;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// REST API namespaces exposed by the platform gateway
///
/// Each namespace is a separate backend subsystem mounted under the
/// gateway's `/api/v2/` prefix. The phone verification flow talks to
/// the authentication subsystem (`Barong`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Authentication and KYC subsystem
    Barong,
    /// Trading subsystem
    Peatio,
    /// Application logic subsystem
    Applogic,
}

impl ApiVersion {
    /// Path segment used for this namespace in gateway URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::Barong => "barong",
            ApiVersion::Peatio => "peatio",
            ApiVersion::Applogic => "applogic",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request options selecting the backend namespace a call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestOptions {
    /// Namespace the request is routed to
    pub api_version: ApiVersion,
}

impl RequestOptions {
    /// Create request options for the given namespace
    pub const fn new(api_version: ApiVersion) -> Self {
        Self { api_version }
    }
}

/// Gateway configuration for the REST client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the platform gateway (scheme and host, no trailing path)
    pub gateway_url: String,

    /// Timeout for gateway requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            gateway_url: String::from("http://localhost:8080"),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Create configuration with the given gateway URL
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `EXBASE_GATEWAY_URL` (required) and
    /// `EXBASE_REQUEST_TIMEOUT_SECS` (optional, defaults to 30).
    pub fn from_env() -> Result<Self, ConfigError> {
        let gateway_url = env::var("EXBASE_GATEWAY_URL")
            .map_err(|_| ConfigError::MissingVar("EXBASE_GATEWAY_URL"))?;

        if !gateway_url.starts_with("http://") && !gateway_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "EXBASE_GATEWAY_URL must be an http(s) URL, got: {}",
                gateway_url
            )));
        }

        Ok(Self {
            gateway_url,
            request_timeout_secs: env::var("EXBASE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Resolve the base URL for a namespace
    ///
    /// Gateway routes are mounted as `{gateway}/api/v2/{namespace}`.
    pub fn base_url(&self, version: ApiVersion) -> String {
        format!(
            "{}/api/v2/{}",
            self.gateway_url.trim_end_matches('/'),
            version.as_str()
        )
    }
}
