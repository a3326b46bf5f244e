use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::store::{NewMedicine, SharedStore};

use super::{none_if_blank, require_owner};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicineRequest {
    pub user_id: String,
    pub name: String,
    pub time: String,
    pub dosage: Option<String>,
    pub notes: Option<String>,
}

/// POST /api/medicines - Create a medication record for the authenticated owner
pub async fn create(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateMedicineRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let owner_id = parse_id("userId", &payload.user_id)?;
    require_owner(&auth, owner_id)?;

    if payload.name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    if payload.time.trim().is_empty() {
        return Err(ApiError::bad_request("time must not be empty"));
    }

    let created = store
        .insert_one(NewMedicine {
            owner_id,
            name: payload.name,
            time: payload.time,
            dosage: none_if_blank(payload.dosage),
            notes: none_if_blank(payload.notes),
        })
        .await?;

    tracing::debug!(medicine_id = %created.id, owner_id = %owner_id, "medicine created");

    // Creation confirmation only; the client re-fetches the list for the
    // store-assigned id.
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Medicine added successfully" })),
    ))
}
