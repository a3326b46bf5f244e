use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::store::SharedStore;

use super::require_owner;

/// DELETE /api/medicines/:user_id/:medicine_id - Permanently delete a record
///
/// The delete predicate includes both ids, so a caller cannot delete another
/// owner's record by guessing its id. No soft delete.
pub async fn delete(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthUser>,
    Path((user_id, medicine_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let owner_id = parse_id("userId", &user_id)?;
    let medicine_id = parse_id("medicineId", &medicine_id)?;
    require_owner(&auth, owner_id)?;

    let deleted = store.delete_by_owner_and_id(owner_id, medicine_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Medicine not found"));
    }

    tracing::debug!(medicine_id = %medicine_id, owner_id = %owner_id, "medicine deleted");

    Ok(Json(json!({ "message": "Medicine deleted successfully" })))
}
