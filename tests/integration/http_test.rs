use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};

use roblink::domain::registry::CodeRegistry;
use roblink::router::build_router;
use roblink::state::AppState;

fn test_server() -> (TestServer, Arc<CodeRegistry>) {
    let registry = Arc::new(CodeRegistry::new());
    let router = build_router(AppState::new(Arc::clone(&registry)));
    (TestServer::new(router).unwrap(), registry)
}

#[tokio::test]
async fn home_reports_liveness() {
    let (server, _) = test_server();
    let res = server.get("/").await;
    assert_eq!(res.status_code(), 200);
    assert!(res.text().contains("online"));
}

#[tokio::test]
async fn generate_code_returns_six_digit_code() {
    let (server, _) = test_server();
    let res = server
        .post("/generate-code")
        .json(&json!({ "robloxId": "111222333" }))
        .await;
    assert_eq!(res.status_code(), 200);

    let body: Value = res.json();
    assert_eq!(body["status"], "success");
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn generate_code_accepts_numeric_roblox_id() {
    let (server, registry) = test_server();
    let res = server
        .post("/generate-code")
        .json(&json!({ "robloxId": 111222333 }))
        .await;
    assert_eq!(res.status_code(), 200);

    let body: Value = res.json();
    let code = body["code"].as_str().unwrap().to_owned();

    // The numeric id was normalized to its decimal string form.
    registry.redeem(&code, "555", "Alice#0001");
    assert_eq!(registry.lookup("111222333").as_deref(), Some("555"));
}

#[tokio::test]
async fn generate_code_without_roblox_id_is_rejected() {
    let (server, registry) = test_server();
    let res = server.post("/generate-code").json(&json!({})).await;
    assert_eq!(res.status_code(), 400);

    let body: Value = res.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Roblox ID not provided.");

    // No code was generated and nothing was linked.
    assert_eq!(registry.lookup(""), None);
}

#[tokio::test]
async fn full_verification_flow() {
    let (server, _) = test_server();

    let res = server
        .post("/generate-code")
        .json(&json!({ "robloxId": "111222333" }))
        .await;
    let code = res.json::<Value>()["code"].as_str().unwrap().to_owned();

    let res = server
        .post("/submit-code")
        .json(&json!({ "code": code, "discordId": "555", "discordTag": "Alice#0001" }))
        .await;
    assert_eq!(res.status_code(), 200);
    let body: Value = res.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Verification successful.");

    let res = server.get("/check-status/111222333").await;
    assert_eq!(res.status_code(), 200);
    let body: Value = res.json();
    assert_eq!(body["verified"], true);
    assert_eq!(body["discordId"], "555");

    // Single-use: the same code fails the second time, still as HTTP 200.
    let res = server
        .post("/submit-code")
        .json(&json!({ "code": code, "discordId": "556", "discordTag": "Bob#0002" }))
        .await;
    assert_eq!(res.status_code(), 200);
    let body: Value = res.json();
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "Invalid or expired code.");
}

#[tokio::test]
async fn submit_unknown_code_is_a_domain_failure_not_an_error() {
    let (server, _) = test_server();
    let res = server
        .post("/submit-code")
        .json(&json!({ "code": "000000", "discordId": "555", "discordTag": "Alice#0001" }))
        .await;
    assert_eq!(res.status_code(), 200);

    let body: Value = res.json();
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "Invalid or expired code.");
}

#[tokio::test]
async fn check_status_for_unverified_player_omits_discord_id() {
    let (server, _) = test_server();
    let res = server.get("/check-status/999").await;
    assert_eq!(res.status_code(), 200);

    let body: Value = res.json();
    assert_eq!(body["verified"], false);
    assert!(body.get("discordId").is_none());
}
