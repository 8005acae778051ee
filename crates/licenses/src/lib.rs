//! Client/license tracking domain module.
//!
//! This crate contains the business rules for tracked client licenses,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage):
//! expiry classification, free-text search with pagination, and form
//! normalization.

pub mod expiry;
pub mod form;
pub mod query;
pub mod record;

pub use expiry::{ExpiryLevel, ExpiryStatus, classify, classify_days, days_until, parse_expiry_date};
pub use form::{FIELDS, FieldKind, FieldSpec, RecordForm};
pub use query::{LevelCounts, PAGE_SIZE, PageRow, QueryResult, SearchQuery, count_levels, query, run, total_pages};
pub use record::{Record, RecordDraft};
