//! REST client for the platform gateway
//!
//! Implements the core [`ApiClientTrait`] seam on top of reqwest. Every
//! failure mode of a call - transport error, non-2xx status, unparseable
//! body - is folded into the core's single [`RemoteCallError`] kind; the
//! effect services upstream do not distinguish between them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use xb_core::errors::{ApiResult, RemoteCallError};
use xb_core::services::phone::ApiClientTrait;
use xb_shared::config::{ApiConfig, RequestOptions};

use crate::InfrastructureError;

/// reqwest-based gateway client
pub struct RestApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RestApiClient {
    /// Create a new gateway client
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = ApiConfig::from_env()?;
        Self::new(config)
    }

    /// Full URL for a namespaced gateway path
    fn endpoint(&self, options: &RequestOptions, path: &str) -> String {
        format!("{}{}", self.config.base_url(options.api_version), path)
    }
}

#[async_trait]
impl ApiClientTrait for RestApiClient {
    async fn post(&self, options: &RequestOptions, path: &str, body: &Value) -> ApiResult<Value> {
        let url = self.endpoint(options, path);
        debug!(
            event = "gateway_request",
            url = %url,
            "sending gateway request"
        );

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteCallError::new(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body_text, status);
            warn!(
                event = "gateway_error",
                status = status.as_u16(),
                url = %url,
                "gateway returned an error status"
            );
            return Err(RemoteCallError::with_status(status.as_u16(), message));
        }

        response.json::<Value>().await.map_err(|e| {
            RemoteCallError::with_status(
                status.as_u16(),
                format!("invalid response body: {}", e),
            )
        })
    }
}

/// Reduce a gateway error body to a readable message
///
/// The gateway answers errors as `{"errors": ["..."]}` or `{"error": "..."}`;
/// anything else falls back to the raw body or the status reason.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = value.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors.iter().filter_map(Value::as_str).collect();
            if !messages.is_empty() {
                return messages.join(", ");
            }
        }
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return error.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown gateway error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}
