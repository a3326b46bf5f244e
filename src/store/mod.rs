pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use memory::MemoryMedicineStore;
pub use postgres::PgMedicineStore;

/// A single medication entry as stored and as returned to clients.
///
/// Wire shape: `{ id, ownerId, name, time, dosage?, notes?, status }`.
/// `time` is an HH:MM time-of-day string; it is stored as given and only
/// interpreted client-side for grouping.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "status", default)]
    pub taken: bool,
}

/// Fields supplied by the caller when creating a record; the store assigns
/// the id and the record starts out not taken.
#[derive(Debug, Clone)]
pub struct NewMedicine {
    pub owner_id: Uuid,
    pub name: String,
    pub time: String,
    pub dosage: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence capability for medication records. Every read, delete and
/// update predicate includes the owner id so one owner can never touch
/// another owner's records.
#[async_trait]
pub trait MedicineStore: Send + Sync {
    async fn insert_one(&self, new: NewMedicine) -> Result<Medicine, StoreError>;

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Medicine>, StoreError>;

    /// Returns false when no record matched the (owner, id) pair.
    async fn delete_by_owner_and_id(
        &self,
        owner_id: Uuid,
        medicine_id: Uuid,
    ) -> Result<bool, StoreError>;

    /// Returns false when no record matched the (owner, id) pair.
    async fn set_taken(
        &self,
        owner_id: Uuid,
        medicine_id: Uuid,
        taken: bool,
    ) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn MedicineStore>;
