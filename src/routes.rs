use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::medicines;
use crate::middleware::jwt_auth_middleware;
use crate::store::SharedStore;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Protected API
        .merge(medicine_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn medicine_routes() -> Router<SharedStore> {
    Router::new()
        .route("/api/medicines", post(medicines::create))
        .route("/api/medicines/:user_id", get(medicines::list))
        .route(
            "/api/medicines/:user_id/:medicine_id",
            delete(medicines::delete),
        )
        .route(
            "/api/medicines/:user_id/:medicine_id/taken",
            put(medicines::set_taken),
        )
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "MedRemind API",
            "version": version,
            "description": "Medication reminder backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "medicines": "POST /api/medicines, GET /api/medicines/:userId, DELETE /api/medicines/:userId/:medicineId, PUT /api/medicines/:userId/:medicineId/taken (protected)",
            }
        }
    }))
}

async fn health(State(store): State<SharedStore>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "store unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "store_error": e.to_string()
                }
            })),
        ),
    }
}
