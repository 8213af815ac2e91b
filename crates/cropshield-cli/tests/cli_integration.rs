//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end against a
//! mock claim service. Each test gets its own data directory so stored
//! sessions never leak between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory and mock service
fn cli_cmd(data_dir: &TempDir, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("cropshield").expect("Failed to find cropshield binary");
    cmd.arg("--data-dir")
        .arg(data_dir.path())
        .arg("--api-url")
        .arg(server.uri())
        .env_remove("CROPSHIELD_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Run the blocking command off the async test thread.
async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .expect("command thread panicked")
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "data": data }))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "registration_no": "HBL-2025-3F9A1C" })))
        .respond_with(ok(json!({
            "farmer_id": 7,
            "registration_no": "HBL-2025-3F9A1C",
            "name": "Ravi Kumar",
            "lands": [{ "id": 11, "land_name": "north field", "crop_type": "Wheat" }]
        })))
        .mount(server)
        .await;
}

async fn login(data_dir: &TempDir, server: &MockServer) {
    mount_login(server).await;
    let mut cmd = cli_cmd(data_dir, server);
    cmd.args(["login", "HBL-2025-3F9A1C"]);
    run(cmd).await.success();
}

// ============================================================================
// Registration Flow
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_register_then_verify_uses_pending_otp() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ok(json!({ "registration_no": "HBL-2025-3F9A1C", "otp": "482913" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/verify-otp"))
        .and(body_json(json!({ "registration_no": "HBL-2025-3F9A1C", "otp": "482913" })))
        .respond_with(ok(json!({ "verified": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args([
        "register",
        "--name",
        "Ravi Kumar",
        "--mobile",
        "9876543210",
        "--aadhaar",
        "123412341234",
    ]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Registered: HBL-2025-3F9A1C"))
        .stdout(predicate::str::contains("OTP: 482913"));

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("verify");
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Verified HBL-2025-3F9A1C"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_verify_without_registration_fails() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("verify");
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("No pending registration"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_verify_other_registration_needs_its_own_otp() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ok(json!({ "registration_no": "HBL-2025-AAAAAA", "otp": "111111" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/verify-otp"))
        .and(body_json(json!({ "registration_no": "HBL-2025-BBBBBB", "otp": "222222" })))
        .respond_with(ok(json!({ "verified": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["register", "--name", "Asha", "--mobile", "1", "--aadhaar", "1"]);
    run(cmd).await.success();

    // The stored OTP belongs to HBL-2025-AAAAAA and must not be sent
    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["verify", "--registration-no", "HBL-2025-BBBBBB"]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("No OTP given; pass --otp"));

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["verify", "--registration-no", "HBL-2025-BBBBBB", "--otp", "222222"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Verified HBL-2025-BBBBBB"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_register_error_is_shown() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "ok": false, "error": "Aadhaar already registered" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args([
        "register", "--name", "Ravi", "--mobile", "1", "--aadhaar", "1",
    ]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Error: Aadhaar already registered"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_register_rejects_non_image_upload() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    let doc = data_dir.path().join("id.txt");
    std::fs::write(&doc, b"not an image").unwrap();

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["register", "--name", "Ravi", "--mobile", "1", "--aadhaar", "1", "--gov-id"])
        .arg(&doc);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("cannot attach"));

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

// ============================================================================
// Session Commands
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_whoami_logout() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    mount_login(&server).await;
    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["login", "HBL-2025-3F9A1C"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Logged in as Ravi Kumar (farmer #7)"))
        .stdout(predicate::str::contains("north field"));

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("whoami");
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Farmer #7: Ravi Kumar"));

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("logout");
    run(cmd).await.success();

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("whoami");
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

// ============================================================================
// Land Commands
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_land_list_uses_session_farmer() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    login(&data_dir, &server).await;

    Mock::given(method("GET"))
        .and(path("/api/lands"))
        .and(query_param("farmer_id", "7"))
        .respond_with(ok(json!([
            { "id": 11, "land_name": "north field", "crop_type": "Wheat", "geo_lat": null, "geo_lon": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["land", "list"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Lands (1):"))
        .stdout(predicate::str::contains("north field — Wheat"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_land_add_prints_added() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/add-land"))
        .respond_with(ok(json!({ "land_id": 21, "land_name": "river plot" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args([
        "land",
        "add",
        "--registration-no",
        "HBL-2025-3F9A1C",
        "--name",
        "river plot",
        "--crop",
        "rice",
        "--lat",
        "12.97",
        "--lon",
        "77.59",
    ]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains(r#"Added: {"land_id":21,"land_name":"river plot"}"#));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_land_add_reports_unreadable_session() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    {
        let table: redb::TableDefinition<&str, &[u8]> =
            redb::TableDefinition::new("client_state");
        let db = redb::Database::create(data_dir.path().join("state.redb")).unwrap();
        let txn = db.begin_write().unwrap();
        {
            let mut t = txn.open_table(table).unwrap();
            t.insert("session", b"not json".as_slice()).unwrap();
        }
        txn.commit().unwrap();
    }

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["land", "add", "--name", "plot"]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Serialization error"))
        .stderr(predicate::str::contains("log in first").not());

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_land_add_rejects_unknown_crop() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args([
        "land",
        "add",
        "--registration-no",
        "HBL-2025-3F9A1C",
        "--name",
        "plot",
        "--crop",
        "Cotton",
    ]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Invalid crop type"));
}

// ============================================================================
// Claim and Payout
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_claim_submit_then_payout_and_status() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    login(&data_dir, &server).await;

    Mock::given(method("POST"))
        .and(path("/api/claims/submit"))
        .and(body_partial_json(json!({
            "farmer_id": 7,
            "land_id": 11,
            "model1": { "NDVI": 0.42 },
            "model2": { "Expected_Yield": 3.1 }
        })))
        .respond_with(ok(json!({
            "claim_id": 99,
            "is_stressed": 1,
            "probability": 0.87,
            "payout_percentage": 64.5,
            "onchain": { "tx_hash": "0xabc123" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/claims/99/tx_status"))
        .respond_with(ok(json!({ "tx_hash": "0xabc123", "status": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args([
        "claim",
        "submit",
        "--land",
        "11",
        "--ndvi",
        "0.42",
        "--expected-yield",
        "3.1",
    ]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("Claim ID: 99"))
        .stdout(predicate::str::contains("Is stressed: Yes"))
        .stdout(predicate::str::contains("645"));

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("payout");
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("https://sepolia.etherscan.io/tx/0xabc123"));

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["claim", "status"]);
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("State: Confirmed"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_claim_requires_login() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["claim", "submit", "--land", "11"]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_payout_without_claim() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("payout");
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("No result"));
}

// ============================================================================
// Service Commands
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ok(json!({ "uptime": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("health");
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("\"uptime\": 42"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_non_json_failure() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.arg("health");
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("HTTP 503: Service Unavailable"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_oracle_authorize_validates_address() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["oracle", "authorize", "0x1234"]);
    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("20 bytes"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_wallet_connect() {
    let data_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    let wallet = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_requestAccounts" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": ["0x52908400098527886E0F7030069857D2E4169EE7"]
        })))
        .expect(1)
        .mount(&wallet)
        .await;

    let mut cmd = cli_cmd(&data_dir, &server);
    cmd.args(["wallet", "connect", "--rpc"]).arg(wallet.uri());
    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains(
            "Wallet: 0x52908400098527886E0F7030069857D2E4169EE7",
        ));
}
