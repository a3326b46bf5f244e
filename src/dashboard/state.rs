use uuid::Uuid;

use crate::store::Medicine;

/// Per-record sync state for optimistic mutations. A record being deleted is
/// hidden from view immediately but kept around so a failed delete can
/// restore it instead of leaving the view inconsistent with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Present,
    PendingDelete,
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub medicine: Medicine,
    pub sync: SyncState,
}

/// In-memory medication list for the dashboard's lifetime. Fetches replace
/// the list wholesale; deletes go through the Present → PendingDelete →
/// (removed | Present) state machine.
#[derive(Debug, Default)]
pub struct DashboardState {
    entries: Vec<Entry>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace local state with a fresh server list.
    pub fn replace_all(&mut self, medicines: Vec<Medicine>) {
        self.entries = medicines
            .into_iter()
            .map(|medicine| Entry {
                medicine,
                sync: SyncState::Present,
            })
            .collect();
    }

    /// Records currently shown, excluding those optimistically removed.
    pub fn visible(&self) -> Vec<&Medicine> {
        self.entries
            .iter()
            .filter(|e| e.sync == SyncState::Present)
            .map(|e| &e.medicine)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Optimistically hide a record ahead of the delete request. Returns
    /// false if the id is unknown or a delete is already pending.
    pub fn begin_delete(&mut self, medicine_id: Uuid) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|e| e.medicine.id == medicine_id && e.sync == SyncState::Present)
        {
            Some(entry) => {
                entry.sync = SyncState::PendingDelete;
                true
            }
            None => false,
        }
    }

    /// The server confirmed the delete; drop the record for good.
    pub fn confirm_delete(&mut self, medicine_id: Uuid) {
        self.entries.retain(|e| e.medicine.id != medicine_id);
    }

    /// The delete failed; roll the record back into view.
    pub fn fail_delete(&mut self, medicine_id: Uuid) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.medicine.id == medicine_id && e.sync == SyncState::PendingDelete)
        {
            entry.sync = SyncState::Present;
        }
    }
}

/// Client-side validation applied before submitting a new medication.
pub fn validate_new(name: &str, time: &str) -> Result<(), String> {
    if name.trim().is_empty() || time.trim().is_empty() {
        return Err("Please fill all required fields".to_string());
    }
    Ok(())
}
