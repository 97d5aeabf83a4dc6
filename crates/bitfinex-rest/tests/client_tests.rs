//! Integration tests for client construction and pair verification

mod common;

use bitfinex_rest::{ApiUrl, BitfinexClient, ClientConfig, PairCheck, RestError};
use common::{capture_warnings, mock_config, public_client, setup_mock_server};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_symbols(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[test]
fn test_client_creation() {
    let client = assert_ok!(BitfinexClient::new());
    assert!(!client.has_credentials());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default().with_user_agent("bitfinex-tests");
    let _client = assert_ok!(BitfinexClient::with_config(config));
}

#[test]
fn test_invalid_api_url_is_a_configuration_error() {
    let err = ApiUrl::new("ws", "api.bitfinex.com", "v1").unwrap_err();
    assert!(matches!(err, RestError::Configuration(_)));
    assert!(err.to_string().contains("protocol=ws"));
}

#[tokio::test]
async fn test_verify_pairs_matches() {
    let server = setup_mock_server().await;
    mount_symbols(&server, json!(["btcusd", "ltcusd", "ltcbtc"])).await;

    let (warnings, _guard) = capture_warnings();
    let client = public_client(&server);

    assert_eq!(assert_ok!(client.verify_pairs().await), PairCheck::Matches);
    assert_eq!(warnings.count(), 0);
}

#[tokio::test]
async fn test_verify_pairs_mismatch_warns() {
    let server = setup_mock_server().await;
    mount_symbols(&server, json!(["btcusd", "ltcusd", "ltcbtc", "ethusd"])).await;

    let (warnings, _guard) = capture_warnings();
    let client = public_client(&server);

    let check = assert_ok!(client.verify_pairs().await);
    match check {
        PairCheck::Mismatch { expected, received } => {
            assert_eq!(expected.len(), 3);
            assert!(received.contains(&"ethusd".to_string()));
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
    assert_eq!(warnings.count(), 1);
}

#[tokio::test]
async fn test_verify_pairs_empty_list_warns() {
    let server = setup_mock_server().await;
    mount_symbols(&server, json!([])).await;

    let (warnings, _guard) = capture_warnings();
    let client = public_client(&server);

    assert_eq!(assert_ok!(client.verify_pairs().await), PairCheck::Unverified);
    assert_eq!(warnings.count(), 1);
}

#[tokio::test]
async fn test_connect_checks_pairs_once() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["btcusd"])))
        .expect(1)
        .mount(&server)
        .await;

    let (warnings, _guard) = capture_warnings();
    let config = mock_config(&server).with_verify_pairs(true);

    let client = assert_ok!(BitfinexClient::connect(config).await);
    assert!(!client.has_credentials());
    assert_eq!(warnings.count(), 1);
}

#[tokio::test]
async fn test_connect_without_pair_check() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let _client = assert_ok!(BitfinexClient::connect(mock_config(&server)).await);
}
