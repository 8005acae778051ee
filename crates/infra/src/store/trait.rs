use std::sync::Arc;

use thiserror::Error;

use licensedesk_core::RecordId;
use licensedesk_licenses::{Record, RecordDraft};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("malformed store data: {0}")]
    Malformed(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// CRUD capability over the tracked record table.
///
/// Invariants implementations must uphold:
/// - ids are assigned by the store and never reused after deletion
/// - `list` returns the most recently created records first
/// - `update` replaces the record wholesale
pub trait RecordStore: Send + Sync {
    fn list(&self) -> StoreResult<Vec<Record>>;

    fn get(&self, id: RecordId) -> StoreResult<Option<Record>>;

    fn create(&self, draft: RecordDraft) -> StoreResult<Record>;

    fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<Record>;

    fn delete(&self, id: RecordId) -> StoreResult<()>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn list(&self) -> StoreResult<Vec<Record>> {
        (**self).list()
    }

    fn get(&self, id: RecordId) -> StoreResult<Option<Record>> {
        (**self).get(id)
    }

    fn create(&self, draft: RecordDraft) -> StoreResult<Record> {
        (**self).create(draft)
    }

    fn update(&self, id: RecordId, draft: RecordDraft) -> StoreResult<Record> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: RecordId) -> StoreResult<()> {
        (**self).delete(id)
    }
}
