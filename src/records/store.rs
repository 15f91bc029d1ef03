//! High-level record store used by CLI commands.
//!
//! `RecordStore` owns the in-memory ordered collection and mirrors it
//! into a durable storage slot on every successful mutation.  The rest
//! of the application works with simple method calls like
//! `store.add(candidate)`; nothing else touches the slot.

use uuid::Uuid;

use crate::errors::{PassopError, Result};
use crate::storage::StorageBackend;

use super::record::{Candidate, Record};

/// The single slot the record collection is serialized into.
pub const STORAGE_KEY: &str = "passwords";

/// Result of a `remove` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user confirmed and the record was deleted.
    Removed,
    /// The user confirmed but no record carried the id; nothing changed.
    NotPresent,
    /// The user declined; nothing changed and nothing was written.
    Cancelled,
}

/// The record collection plus its durable mirror.
///
/// Persistence is write-through: every successful `add`, `update`, and
/// confirmed `remove` serializes the whole collection and overwrites
/// the slot before returning.  The store never prompts the user itself;
/// `remove` takes a confirmation callback supplied by the caller.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    records: Vec<Record>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Load the collection from the backend's storage slot.
    ///
    /// An absent slot yields an empty collection, and so does a slot
    /// whose contents fail to deserialize — unparsable stored data is
    /// recovered locally, not surfaced to the user.
    pub fn load(backend: B) -> Result<Self> {
        let records = match backend.read(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { backend, records })
    }

    /// The current ordered collection, for rendering.  Read-only.
    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id (used to populate the edit prompts).
    pub fn find(&self, id: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PassopError::RecordNotFound(id.to_string()))
    }

    /// Validate `candidate`, mint a fresh id, append, and persist.
    ///
    /// Returns the new record.  On validation failure nothing is
    /// mutated and nothing is written.
    pub fn add(&mut self, candidate: Candidate) -> Result<Record> {
        candidate.validate()?;

        let record = candidate.into_record(Uuid::new_v4().to_string());
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replace the record carrying `id` in place, keeping its position
    /// and identifier, then persist.
    ///
    /// Fails with `RecordNotFound` if the id is absent and with a
    /// validation error under the same rule as `add`; neither failure
    /// mutates the collection.
    pub fn update(&mut self, id: &str, candidate: Candidate) -> Result<Record> {
        candidate.validate()?;

        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PassopError::RecordNotFound(id.to_string()))?;

        *slot = candidate.into_record(id.to_string());
        let updated = slot.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Delete the record carrying `id`, gated on `confirm`.
    ///
    /// The caller supplies the confirmation capability (an interactive
    /// prompt, a `--force` flag, a test stub) so the store itself never
    /// blocks.  Declining leaves both the collection and the slot
    /// untouched.  A confirmed delete of an absent id is a no-op, not
    /// an error.
    pub fn remove<F>(&mut self, id: &str, confirm: F) -> Result<RemoveOutcome>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return Ok(RemoveOutcome::Cancelled);
        }

        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(RemoveOutcome::NotPresent);
        }

        self.persist()?;
        Ok(RemoveOutcome::Removed)
    }

    /// Returns the number of saved records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a reference to the storage backend (tests inspect the
    /// slot through this).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize the whole collection and overwrite the storage slot.
    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.records)
            .map_err(|e| PassopError::Serialization(e.to_string()))?;
        self.backend.write(STORAGE_KEY, &raw)
    }
}
