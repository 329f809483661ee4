//! Phone verification effect service

use std::sync::Arc;

use serde_json::Value;
use xb_shared::config::{ApiVersion, RequestOptions};

use crate::dispatch::Dispatcher;
use crate::domain::actions::{success_keys, Action, AlertAction, PhoneAction};
use crate::errors::{ApiResult, RemoteCallError};

use super::traits::ApiClientTrait;
use super::types::{AddPhoneRequest, PhoneResponse, SendCodeRequest, VerifyPhoneRequest};

const PHONES_PATH: &str = "/resource/phones";
const PHONES_SEND_CODE_PATH: &str = "/resource/phones/send_code";
const PHONES_VERIFY_PATH: &str = "/resource/phones/verify";

/// Effect service for the phone KYC flow
///
/// Each operation performs exactly one gateway call and dispatches exactly
/// one outcome pair: the flow's data action first, then the UI alert. On
/// failure the same error value is carried by both actions. Operations
/// return nothing to the caller; all outcomes travel through the
/// dispatcher. The service keeps no state between invocations.
pub struct PhoneService<A: ApiClientTrait> {
    /// Gateway client
    api_client: Arc<A>,
    /// Sender half of the application action stream
    dispatcher: Dispatcher,
    /// Namespace options for the phone endpoints
    options: RequestOptions,
}

impl<A: ApiClientTrait> PhoneService<A> {
    /// Create a new phone service
    ///
    /// The phone endpoints live in the authentication namespace, so the
    /// service pins `ApiVersion::Barong` for all of its calls.
    pub fn new(api_client: Arc<A>, dispatcher: Dispatcher) -> Self {
        Self {
            api_client,
            dispatcher,
            options: RequestOptions::new(ApiVersion::Barong),
        }
    }

    /// Attach a phone number to the current account
    ///
    /// Dispatches `PhoneAction::Created` + a success alert, or
    /// `PhoneAction::CreateFailed` + an error alert.
    pub async fn add_phone(&self, request: AddPhoneRequest) {
        match self.call(PHONES_PATH, &request.payload).await {
            Ok(PhoneResponse { message }) => {
                tracing::info!(event = "phone_created", "phone record created");
                self.dispatcher
                    .dispatch(Action::Phone(PhoneAction::Created { message }));
                self.dispatcher.dispatch(Action::Alert(AlertAction::success(
                    success_keys::PHONE_VERIFICATION_SENT,
                )));
            }
            Err(error) => {
                tracing::warn!(
                    event = "phone_create_failed",
                    error = %error,
                    "creating phone record failed"
                );
                self.dispatcher
                    .dispatch(Action::Phone(PhoneAction::CreateFailed {
                        error: error.clone(),
                    }));
                self.dispatcher.dispatch(Action::Alert(AlertAction::error(error)));
            }
        }
    }

    /// Request a (new) verification code for a phone number
    ///
    /// Dispatches `PhoneAction::CodeSent` + a success alert, or
    /// `PhoneAction::SendCodeFailed` + an error alert.
    pub async fn send_code(&self, request: SendCodeRequest) {
        match self.call(PHONES_SEND_CODE_PATH, &request.payload).await {
            Ok(PhoneResponse { message }) => {
                tracing::info!(event = "phone_code_sent", "verification code requested");
                self.dispatcher
                    .dispatch(Action::Phone(PhoneAction::CodeSent { message }));
                self.dispatcher.dispatch(Action::Alert(AlertAction::success(
                    success_keys::PHONE_VERIFICATION_SENT,
                )));
            }
            Err(error) => {
                tracing::warn!(
                    event = "phone_send_code_failed",
                    error = %error,
                    "requesting verification code failed"
                );
                self.dispatcher
                    .dispatch(Action::Phone(PhoneAction::SendCodeFailed {
                        error: error.clone(),
                    }));
                self.dispatcher.dispatch(Action::Alert(AlertAction::error(error)));
            }
        }
    }

    /// Submit a phone confirmation code
    ///
    /// Dispatches `PhoneAction::Verified` + a success alert keyed
    /// `success.phone.confirmed`, or `PhoneAction::VerifyFailed` + an error
    /// alert carrying the same error.
    pub async fn confirm_phone(&self, request: VerifyPhoneRequest) {
        match self.call(PHONES_VERIFY_PATH, &request.payload).await {
            Ok(PhoneResponse { message }) => {
                tracing::info!(event = "phone_confirmed", "phone verification confirmed");
                self.dispatcher
                    .dispatch(Action::Phone(PhoneAction::Verified { message }));
                self.dispatcher.dispatch(Action::Alert(AlertAction::success(
                    success_keys::PHONE_CONFIRMED,
                )));
            }
            Err(error) => {
                tracing::warn!(
                    event = "phone_confirm_failed",
                    error = %error,
                    "phone verification failed"
                );
                self.dispatcher
                    .dispatch(Action::Phone(PhoneAction::VerifyFailed {
                        error: error.clone(),
                    }));
                self.dispatcher.dispatch(Action::Alert(AlertAction::error(error)));
            }
        }
    }

    /// Perform one gateway call and parse the success body
    async fn call(&self, path: &str, payload: &Value) -> ApiResult<PhoneResponse> {
        let body = self.api_client.post(&self.options, path, payload).await?;
        serde_json::from_value(body)
            .map_err(|e| RemoteCallError::new(format!("unexpected response body: {}", e)))
    }
}
