//! Demonstrates the phone confirmation flow against a live gateway.
//!
//! Usage:
//! ```bash
//! EXBASE_GATEWAY_URL=https://gateway.exbase.io \
//!     cargo run --example phone_confirm_demo -- +15551234567 123456
//! ```

use std::sync::Arc;

use xb_core::dispatch::Dispatcher;
use xb_core::services::phone::{PhoneService, VerifyPhoneRequest};
use xb_infra::RestApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let phone = args.next().unwrap_or_else(|| "+15551234567".to_string());
    let code = args.next().unwrap_or_else(|| "123456".to_string());

    let api_client = Arc::new(RestApiClient::from_env()?);
    let (dispatcher, mut rx) = Dispatcher::channel();
    let service = PhoneService::new(api_client, dispatcher);

    println!("Submitting confirmation code for {}...", phone);
    service
        .confirm_phone(VerifyPhoneRequest::new(&phone, &code))
        .await;

    while let Ok(action) = rx.try_recv() {
        println!("dispatched: {:?}", action);
    }

    Ok(())
}
