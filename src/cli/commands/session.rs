use serde_json::json;

use crate::cli::render::output_success;
use crate::cli::OutputFormat;
use crate::dashboard::{Session, SessionError, TokenStore};

/// Open the session lifecycle: persist an externally issued token.
pub fn login(token: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let store = TokenStore::new()?;
    let session = match Session::login(&store, token) {
        Ok(session) => session,
        Err(SessionError::LoginRequired) => {
            anyhow::bail!("Token could not be decoded; check the token and try again")
        }
        Err(e) => return Err(e.into()),
    };

    output_success(
        output_format,
        &format!("Logged in as {}", session.user_id),
        Some(json!({ "user_id": session.user_id })),
    )
}

/// Tear the session down and forget the token.
pub fn logout(output_format: &OutputFormat) -> anyhow::Result<()> {
    let store = TokenStore::new()?;
    Session::logout(&store)?;

    output_success(output_format, "Logged out", None)
}

pub fn whoami(output_format: &OutputFormat) -> anyhow::Result<()> {
    let store = TokenStore::new()?;
    match Session::bootstrap(&store) {
        Ok(session) => output_success(
            output_format,
            &format!("Logged in as {}", session.user_id),
            Some(json!({ "user_id": session.user_id })),
        ),
        Err(SessionError::LoginRequired) => {
            anyhow::bail!("No session. Run `medremind login <token>` first")
        }
        Err(e) => Err(e.into()),
    }
}
