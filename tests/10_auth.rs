mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_endpoint_describes_api() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "MedRemind API");
    Ok(())
}

#[tokio::test]
async fn missing_token_is_unauthorized() -> Result<()> {
    let app = common::test_app();
    let owner = Uuid::new_v4();

    let (status, body) =
        common::send(&app, "GET", &format!("/api/medicines/{}", owner), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_unauthorized() -> Result<()> {
    let app = common::test_app();
    let owner = Uuid::new_v4();

    let (status, _) = common::send(
        &app,
        "GET",
        &format!("/api/medicines/{}", owner),
        Some("not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_subject_must_match_requested_owner() -> Result<()> {
    let app = common::test_app();
    let alice = Uuid::new_v4();
    let bob_token = common::bearer_token(Uuid::new_v4());

    // Reading another owner's list is rejected outright
    let (status, body) = common::send(
        &app,
        "GET",
        &format!("/api/medicines/{}", alice),
        Some(&bob_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    // Same for writes
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/medicines",
        Some(&bob_token),
        Some(json!({ "userId": alice, "name": "Aspirin", "time": "08:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}
