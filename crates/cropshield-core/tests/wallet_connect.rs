//! Wallet provider tests against a mock JSON-RPC endpoint.

use cropshield_core::{ClientError, WalletConnector};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDR: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

#[tokio::test]
async fn test_connect_returns_first_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_requestAccounts" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [ADDR, "0x0000000000000000000000000000000000000001"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wallet = WalletConnector::new(server.uri()).unwrap();
    let addr = wallet.connect().await.unwrap();
    assert_eq!(addr.as_str(), ADDR);
}

#[tokio::test]
async fn test_user_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": 4001, "message": "User rejected the request." }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = WalletConnector::new(server.uri())
        .unwrap()
        .connect()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Wallet(ref m) if m == "request rejected in wallet"));
}

#[tokio::test]
async fn test_no_accounts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": 1, "result": [] })),
        )
        .mount(&server)
        .await;

    let err = WalletConnector::new(server.uri())
        .unwrap()
        .connect()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Wallet error: wallet returned no accounts");
}

#[tokio::test]
async fn test_provider_down() {
    let err = WalletConnector::new("http://127.0.0.1:1")
        .unwrap()
        .connect()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Wallet(_)));
}
