//! Record store boundary.
//!
//! The dashboard reads and writes client license rows through [`RecordStore`]
//! without making any storage assumptions; the hosted database client is one
//! implementation, [`InMemoryRecordStore`] is another.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::{RecordStore, StoreError, StoreResult};
