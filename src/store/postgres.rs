use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::config;
use crate::store::{Medicine, MedicineStore, NewMedicine, StoreError};

/// Postgres-backed store. A single `medicines` table holds one row per
/// record; all predicates are single-row, so atomicity comes from the
/// database itself.
pub struct PgMedicineStore {
    pool: PgPool,
}

impl PgMedicineStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let db = &config::config().database;
        let pool = PgPoolOptions::new()
            .max_connections(db.max_connections)
            .acquire_timeout(Duration::from_secs(db.connection_timeout))
            .connect(url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Create the medicines table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS medicines (
                id UUID PRIMARY KEY,
                owner_id UUID NOT NULL,
                name TEXT NOT NULL,
                time TEXT NOT NULL,
                dosage TEXT,
                notes TEXT,
                taken BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS medicines_owner_idx ON medicines (owner_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl MedicineStore for PgMedicineStore {
    async fn insert_one(&self, new: NewMedicine) -> Result<Medicine, StoreError> {
        let medicine = sqlx::query_as::<_, Medicine>(
            r#"
            INSERT INTO medicines (id, owner_id, name, time, dosage, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, owner_id, name, time, dosage, notes, taken
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.owner_id)
        .bind(&new.name)
        .bind(&new.time)
        .bind(new.dosage.as_deref())
        .bind(new.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(medicine)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Medicine>, StoreError> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id, owner_id, name, time, dosage, notes, taken
            FROM medicines
            WHERE owner_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(medicines)
    }

    async fn delete_by_owner_and_id(
        &self,
        owner_id: Uuid,
        medicine_id: Uuid,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM medicines WHERE id = $1 AND owner_id = $2")
            .bind(medicine_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_taken(
        &self,
        owner_id: Uuid,
        medicine_id: Uuid,
        taken: bool,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE medicines SET taken = $3 WHERE id = $1 AND owner_id = $2")
            .bind(medicine_id)
            .bind(owner_id)
            .bind(taken)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
