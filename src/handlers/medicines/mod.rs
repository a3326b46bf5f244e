pub mod create;
pub mod delete;
pub mod list;
pub mod taken;

// Re-export handler functions for use in routing
pub use create::create;
pub use delete::delete;
pub use list::list;
pub use taken::set_taken;

use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Every medicine operation is scoped to the owner named in the request;
/// the token subject must match or the request is rejected outright.
pub(crate) fn require_owner(auth: &AuthUser, owner_id: Uuid) -> Result<(), ApiError> {
    if auth.user_id != owner_id {
        return Err(ApiError::forbidden(
            "Token subject does not match requested owner",
        ));
    }
    Ok(())
}

/// Optional free-text fields arrive as empty strings from form submissions;
/// store them as absent.
pub(crate) fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
