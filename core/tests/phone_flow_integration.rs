//! Integration test driving the whole phone KYC flow through the crate's
//! public API: add phone -> resend code -> confirm code.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use xb_core::dispatch::Dispatcher;
use xb_core::domain::actions::{success_keys, Action, AlertAction, PhoneAction};
use xb_core::errors::{ApiResult, RemoteCallError};
use xb_core::services::phone::{
    AddPhoneRequest, ApiClientTrait, PhoneService, SendCodeRequest, VerifyPhoneRequest,
};
use xb_shared::config::RequestOptions;

/// Gateway stand-in with one canned result per endpoint path
struct ScriptedGateway {
    responses: Mutex<HashMap<&'static str, ApiResult<Value>>>,
}

impl ScriptedGateway {
    fn new(responses: Vec<(&'static str, ApiResult<Value>)>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ApiClientTrait for ScriptedGateway {
    async fn post(&self, _options: &RequestOptions, path: &str, _body: &Value) -> ApiResult<Value> {
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(RemoteCallError::new(format!("unexpected path {}", path))))
    }
}

#[tokio::test]
async fn test_full_phone_flow_happy_path() {
    let gateway = std::sync::Arc::new(ScriptedGateway::new(vec![
        ("/resource/phones", Ok(json!({ "message": "Code was sent" }))),
        (
            "/resource/phones/send_code",
            Ok(json!({ "message": "Code was resent" })),
        ),
        (
            "/resource/phones/verify",
            Ok(json!({ "message": "Phone verified" })),
        ),
    ]));
    let (dispatcher, mut rx) = Dispatcher::channel();
    let service = PhoneService::new(gateway, dispatcher);

    service.add_phone(AddPhoneRequest::new("+15551234567")).await;
    service.send_code(SendCodeRequest::new("+15551234567")).await;
    service
        .confirm_phone(VerifyPhoneRequest::new("+15551234567", "123456"))
        .await;

    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }

    assert_eq!(
        actions,
        vec![
            Action::Phone(PhoneAction::Created {
                message: "Code was sent".to_string(),
            }),
            Action::Alert(AlertAction::success(success_keys::PHONE_VERIFICATION_SENT)),
            Action::Phone(PhoneAction::CodeSent {
                message: "Code was resent".to_string(),
            }),
            Action::Alert(AlertAction::success(success_keys::PHONE_VERIFICATION_SENT)),
            Action::Phone(PhoneAction::Verified {
                message: "Phone verified".to_string(),
            }),
            Action::Alert(AlertAction::success(success_keys::PHONE_CONFIRMED)),
        ]
    );
}

#[tokio::test]
async fn test_flow_stops_reporting_through_alerts_on_rejection() {
    let gateway = std::sync::Arc::new(ScriptedGateway::new(vec![(
        "/resource/phones/verify",
        Err(RemoteCallError::with_status(422, "invalid code")),
    )]));
    let (dispatcher, mut rx) = Dispatcher::channel();
    let service = PhoneService::new(gateway, dispatcher);

    service
        .confirm_phone(VerifyPhoneRequest::new("+15551234567", "999999"))
        .await;

    let expected_error = RemoteCallError::with_status(422, "invalid code");
    assert_eq!(
        rx.try_recv().unwrap(),
        Action::Phone(PhoneAction::VerifyFailed {
            error: expected_error.clone(),
        })
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        Action::Alert(AlertAction::error(expected_error))
    );
    assert!(rx.try_recv().is_err());
}
