use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::store::Medicine;

use super::session::Session;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Server-reported failure; carries the server's message when present.
    #[error("{0}")]
    Api(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMedicine {
    pub user_id: Uuid,
    pub name: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// HTTP client for the medicines API. Attaches the session's bearer token to
/// every request; one network call per user action, no retries.
pub struct MedicineClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    user_id: Uuid,
}

impl MedicineClient {
    pub fn new(base_url: impl Into<String>, session: &Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: session.token.clone(),
            user_id: session.user_id,
        }
    }

    /// API base URL from the environment, with a local default.
    pub fn base_url_from_env() -> String {
        std::env::var("MEDREMIND_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub async fn list(&self) -> Result<Vec<Medicine>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/medicines/{}", self.base_url, self.user_id))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn add(&self, medicine: &AddMedicine) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/medicines", self.base_url))
            .bearer_auth(&self.token)
            .json(medicine)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn remove(&self, medicine_id: Uuid) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!(
                "{}/api/medicines/{}/{}",
                self.base_url, self.user_id, medicine_id
            ))
            .bearer_auth(&self.token)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn set_taken(&self, medicine_id: Uuid, taken: bool) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(format!(
                "{}/api/medicines/{}/{}/taken",
                self.base_url, self.user_id, medicine_id
            ))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "taken": taken }))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

/// Map non-2xx responses to the server-provided message, falling back to a
/// generic one when the body is not what we expect.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let message = match resp.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| "Server error".to_string()),
        Err(_) => "Server error".to_string(),
    };

    Err(ClientError::Api(message))
}
