//! Mock gateway client for testing the phone service

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use xb_shared::config::{ApiVersion, RequestOptions};

use crate::errors::{ApiResult, RemoteCallError};
use crate::services::phone::ApiClientTrait;

/// One recorded gateway call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_version: ApiVersion,
    pub path: String,
    pub body: Value,
}

/// Scripted gateway client
///
/// Canned results are registered per path; every call is recorded so tests
/// can assert on what went over the wire.
pub struct MockApiClient {
    responses: Mutex<HashMap<String, ApiResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register the result the next calls to `path` will resolve with
    pub fn respond_with(&self, path: &str, result: ApiResult<Value>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), result);
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiClientTrait for MockApiClient {
    async fn post(&self, options: &RequestOptions, path: &str, body: &Value) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_version: options.api_version,
            path: path.to_string(),
            body: body.clone(),
        });

        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(RemoteCallError::new(format!("no canned response for {}", path))))
    }
}
