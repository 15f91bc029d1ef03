//! Records module — the credential collection and its store.
//!
//! This module provides:
//! - `Record` and `Candidate` types with field validation (`record`)
//! - High-level `RecordStore` that keeps the in-memory collection and
//!   its durable mirror in sync (`store`)

pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{Candidate, Record, MIN_FIELD_LEN};
pub use store::{RecordStore, RemoveOutcome, STORAGE_KEY};
