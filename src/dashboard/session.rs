use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Claims;

/// Persisted bearer token, the client-held session state. Stored as a JSON
/// file under the config dir; cleared on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    saved_at: DateTime<Utc>,
}

pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            path: get_config_dir()?.join("token.json"),
        })
    }

    /// Store backed by an explicit path, for tests.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let stored: StoredToken = serde_json::from_str(&content)?;
        Ok(Some(stored.token))
    }

    pub fn save(&self, token: &str) -> anyhow::Result<()> {
        let stored = StoredToken {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("MEDREMIND_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("medremind")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no valid session; login required")]
    LoginRequired,
    #[error("session storage error: {0}")]
    Storage(String),
}

/// Explicit session context passed to every data-fetching and mutation
/// operation: the bearer token plus the owner id extracted from its claims.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
}

impl Session {
    /// Restore the session from the persisted token. An absent or
    /// undecodable token means the user has to go through the login flow.
    pub fn bootstrap(store: &TokenStore) -> Result<Self, SessionError> {
        let token = store
            .load()
            .map_err(|e| SessionError::Storage(e.to_string()))?
            .ok_or(SessionError::LoginRequired)?;
        let user_id = decode_subject(&token).ok_or(SessionError::LoginRequired)?;
        Ok(Self { token, user_id })
    }

    /// Persist a freshly issued token and open a session with it.
    pub fn login(store: &TokenStore, token: &str) -> Result<Self, SessionError> {
        let user_id = decode_subject(token).ok_or(SessionError::LoginRequired)?;
        store
            .save(token)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        Ok(Self {
            token: token.to_string(),
            user_id,
        })
    }

    /// Tear the session down: forget the persisted token.
    pub fn logout(store: &TokenStore) -> Result<(), SessionError> {
        store
            .clear()
            .map_err(|e| SessionError::Storage(e.to_string()))
    }
}

/// Extract the owner id from the token claims without verifying the
/// signature. The token is trusted as the identity source here; authenticity
/// is enforced server-side on every request.
fn decode_subject(token: &str) -> Option<Uuid> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .map(|data| data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::generate_token;

    fn temp_store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::at(dir.path().join("token.json"));
        (dir, store)
    }

    #[test]
    fn test_decode_subject_without_verification() {
        let user_id = Uuid::new_v4();
        let token = generate_token(&Claims::new(user_id)).unwrap();
        assert_eq!(decode_subject(&token), Some(user_id));
    }

    #[test]
    fn test_decode_subject_rejects_garbage() {
        assert_eq!(decode_subject("not-a-token"), None);
    }

    #[test]
    fn test_bootstrap_without_token_requires_login() {
        let (_dir, store) = temp_store();
        assert!(matches!(
            Session::bootstrap(&store),
            Err(SessionError::LoginRequired)
        ));
    }

    #[test]
    fn test_login_bootstrap_logout_lifecycle() {
        let (_dir, store) = temp_store();
        let user_id = Uuid::new_v4();
        let token = generate_token(&Claims::new(user_id)).unwrap();

        let session = Session::login(&store, &token).unwrap();
        assert_eq!(session.user_id, user_id);

        let restored = Session::bootstrap(&store).unwrap();
        assert_eq!(restored.user_id, user_id);
        assert_eq!(restored.token, token);

        Session::logout(&store).unwrap();
        assert!(matches!(
            Session::bootstrap(&store),
            Err(SessionError::LoginRequired)
        ));
    }

    #[test]
    fn test_undecodable_persisted_token_requires_login() {
        let (_dir, store) = temp_store();
        store.save("garbage").unwrap();
        assert!(matches!(
            Session::bootstrap(&store),
            Err(SessionError::LoginRequired)
        ));
    }
}
