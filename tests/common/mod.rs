#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use medremind_api::auth::{generate_token, Claims};
use medremind_api::routes::app;
use medremind_api::store::MemoryMedicineStore;

/// Router over a fresh in-memory store; each test gets an isolated store.
pub fn test_app() -> Router {
    app(Arc::new(MemoryMedicineStore::new()))
}

/// Mint a bearer token for the given owner, signed with the configured
/// (development) secret, standing in for the external login service.
pub fn bearer_token(user_id: Uuid) -> String {
    generate_token(&Claims::new(user_id)).expect("token generation")
}

/// Fire a single request at the router and decode the JSON response body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
