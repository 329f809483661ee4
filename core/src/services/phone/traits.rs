//! Trait for gateway client integration

use async_trait::async_trait;
use serde_json::Value;
use xb_shared::config::RequestOptions;

use crate::errors::ApiResult;

/// Trait for the REST gateway client
///
/// The infrastructure layer provides the HTTP implementation; tests
/// substitute a scripted mock. `options` selects the backend namespace the
/// call is routed to.
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// POST a JSON body to `path` under the namespace selected by `options`
    async fn post(&self, options: &RequestOptions, path: &str, body: &Value) -> ApiResult<Value>;
}
