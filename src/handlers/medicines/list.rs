use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::AuthUser;
use crate::store::{Medicine, SharedStore};

use super::require_owner;

/// GET /api/medicines/:user_id - List all medication records for an owner
///
/// Malformed owner ids are always rejected with a client error; an empty
/// array means a well-formed id with no matches.
pub async fn list(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Medicine>>, ApiError> {
    let owner_id = parse_id("userId", &user_id)?;
    require_owner(&auth, owner_id)?;

    let medicines = store.find_by_owner(owner_id).await?;
    Ok(Json(medicines))
}
