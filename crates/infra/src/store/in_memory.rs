use std::collections::BTreeMap;
use std::sync::RwLock;

use licensedesk_core::RecordId;
use licensedesk_licenses::{Record, RecordDraft};

use super::r#trait::{RecordStore, StoreError, StoreResult};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<RecordId, Record>,
    /// High-water mark; only ever grows, so deleted ids are never handed out again.
    last_id: i64,
}

/// In-memory record table.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    table: RwLock<Table>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Seed with existing rows; fresh ids continue after the highest seeded id.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> StoreResult<Self> {
        let mut rows = BTreeMap::new();
        for record in records {
            let id = record.id;
            if rows.insert(id, record).is_some() {
                return Err(StoreError::Malformed(format!("duplicate record id {id}")));
            }
        }
        let last_id = rows.keys().next_back().map(|id| id.get()).unwrap_or(0).max(0);

        Ok(Self {
            table: RwLock::new(Table { rows, last_id }),
        })
    }

    /// Seed from a JSON array of records.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Self::with_records(records)
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Table>> {
        self.table
            .read()
            .map_err(|_| StoreError::Unavailable("record table lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Table>> {
        self.table
            .write()
            .map_err(|_| StoreError::Unavailable("record table lock poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list(&self) -> StoreResult<Vec<Record>> {
        let table = self.read()?;
        Ok(table.rows.values().rev().cloned().collect())
    }

    fn get(&self, id: RecordId) -> StoreResult<Option<Record>> {
        let table = self.read()?;
        Ok(table.rows.get(&id).cloned())
    }

    fn create(&self, draft: RecordDraft) -> StoreResult<Record> {
        let mut table = self.write()?;
        table.last_id += 1;
        let record = Record::from_draft(RecordId::new(table.last_id), draft);
        table.rows.insert(record.id, record.clone());

        tracing::debug!(record_id = %record.id, "record created");
        Ok(record)
    }

    fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<Record> {
        let mut table = self.write()?;
        let slot = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = Record::from_draft(id, draft);

        tracing::debug!(record_id = %id, "record replaced");
        Ok(slot.clone())
    }

    fn delete(&self, id: RecordId) -> StoreResult<()> {
        let mut table = self.write()?;
        table.rows.remove(&id).ok_or(StoreError::NotFound(id))?;

        tracing::debug!(record_id = %id, "record deleted");
        Ok(())
    }
}
