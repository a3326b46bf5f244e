use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{Medicine, MedicineStore, NewMedicine, StoreError};

/// In-memory store used by tests and as a no-database development fallback.
/// Insertion order is the store-native order returned by `find_by_owner`.
#[derive(Default)]
pub struct MemoryMedicineStore {
    records: RwLock<Vec<Medicine>>,
}

impl MemoryMedicineStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicineStore for MemoryMedicineStore {
    async fn insert_one(&self, new: NewMedicine) -> Result<Medicine, StoreError> {
        let medicine = Medicine {
            id: Uuid::new_v4(),
            owner_id: new.owner_id,
            name: new.name,
            time: new.time,
            dosage: new.dosage,
            notes: new.notes,
            taken: false,
        };
        self.records.write().await.push(medicine.clone());
        Ok(medicine)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Medicine>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|m| m.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_by_owner_and_id(
        &self,
        owner_id: Uuid,
        medicine_id: Uuid,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|m| !(m.id == medicine_id && m.owner_id == owner_id));
        Ok(records.len() < before)
    }

    async fn set_taken(
        &self,
        owner_id: Uuid,
        medicine_id: Uuid,
        taken: bool,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|m| m.id == medicine_id && m.owner_id == owner_id)
        {
            Some(medicine) => {
                medicine.taken = taken;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_medicine(owner_id: Uuid, name: &str, time: &str) -> NewMedicine {
        NewMedicine {
            owner_id,
            name: name.to_string(),
            time: time.to_string(),
            dosage: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_by_owner() {
        let store = MemoryMedicineStore::new();
        let owner = Uuid::new_v4();

        let created = store
            .insert_one(new_medicine(owner, "Aspirin", "08:00"))
            .await
            .unwrap();
        assert!(!created.taken);

        let found = store.find_by_owner(owner).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
        assert_eq!(found[0].name, "Aspirin");
    }

    #[tokio::test]
    async fn test_find_never_returns_other_owners_records() {
        let store = MemoryMedicineStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .insert_one(new_medicine(alice, "Aspirin", "08:00"))
            .await
            .unwrap();

        assert!(store.find_by_owner(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_matching_owner() {
        let store = MemoryMedicineStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let created = store
            .insert_one(new_medicine(alice, "Aspirin", "08:00"))
            .await
            .unwrap();

        // Guessing the record id under a different owner must not delete it
        assert!(!store.delete_by_owner_and_id(bob, created.id).await.unwrap());
        assert_eq!(store.find_by_owner(alice).await.unwrap().len(), 1);

        assert!(store
            .delete_by_owner_and_id(alice, created.id)
            .await
            .unwrap());
        assert!(store.find_by_owner(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_taken_flips_flag() {
        let store = MemoryMedicineStore::new();
        let owner = Uuid::new_v4();

        let created = store
            .insert_one(new_medicine(owner, "Aspirin", "08:00"))
            .await
            .unwrap();

        assert!(store.set_taken(owner, created.id, true).await.unwrap());
        let found = store.find_by_owner(owner).await.unwrap();
        assert!(found[0].taken);

        // Unknown pair reports no match
        assert!(!store.set_taken(owner, Uuid::new_v4(), true).await.unwrap());
    }
}
