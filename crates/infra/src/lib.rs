//! Infrastructure layer: record store, configuration, dashboard orchestration.

pub mod config;
pub mod dashboard;
pub mod store;

pub use config::{DeskClock, DeskConfig};
pub use dashboard::{Dashboard, DashboardError, DashboardResult};
pub use store::{InMemoryRecordStore, RecordStore, StoreError, StoreResult};
