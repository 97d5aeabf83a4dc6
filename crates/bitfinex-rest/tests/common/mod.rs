//! Common test utilities for bitfinex-rest tests

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bitfinex_rest::{ApiUrl, BitfinexClient, ClientConfig, Credentials};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use wiremock::{MockServer, Request};

pub const TEST_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointing at the mock server, pair check off
pub fn mock_config(server: &MockServer) -> ClientConfig {
    let api_url = ApiUrl::new("http", server.address().to_string(), "v1")
        .expect("mock server address is a valid host");
    ClientConfig::new()
        .with_api_url(api_url)
        .with_verify_pairs(false)
}

pub fn public_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config(mock_config(server)).expect("client should build")
}

pub fn authenticated_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config(mock_config(server).with_credentials(test_credentials()))
        .expect("client should build")
}

/// Client whose requests give up long before the mock answers
pub fn impatient_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config(mock_config(server).with_timeout(Duration::from_millis(200)))
        .expect("client should build")
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_KEY, TEST_SECRET).expect("test credentials are valid")
}

/// Decoded `X-BFX-PAYLOAD` of a received request
pub fn decoded_payload(request: &Request) -> Option<serde_json::Value> {
    let encoded = request.headers.get("X-BFX-PAYLOAD")?.to_str().ok()?;
    let bytes = BASE64.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Counts `warn` events emitted by this crate
#[derive(Clone, Default)]
pub struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == Level::WARN && metadata.target().starts_with("bitfinex_rest") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install a warning counter for the current thread
pub fn capture_warnings() -> (WarnCounter, DefaultGuard) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
