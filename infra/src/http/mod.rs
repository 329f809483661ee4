//! HTTP client module for the platform gateway

mod rest_client;

pub use rest_client::RestApiClient;
