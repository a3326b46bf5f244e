use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::store::SharedStore;

use super::require_owner;

#[derive(Debug, Deserialize)]
pub struct SetTakenRequest {
    pub taken: bool,
}

/// PUT /api/medicines/:user_id/:medicine_id/taken - Mark a record taken (or not)
pub async fn set_taken(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthUser>,
    Path((user_id, medicine_id)): Path<(String, String)>,
    Json(payload): Json<SetTakenRequest>,
) -> Result<Json<Value>, ApiError> {
    let owner_id = parse_id("userId", &user_id)?;
    let medicine_id = parse_id("medicineId", &medicine_id)?;
    require_owner(&auth, owner_id)?;

    let updated = store
        .set_taken(owner_id, medicine_id, payload.taken)
        .await?;
    if !updated {
        return Err(ApiError::not_found("Medicine not found"));
    }

    Ok(Json(json!({ "message": "Medicine updated successfully" })))
}
