//! In-memory record store.
//!
//! Records are kept in insertion order. Names are not required to be
//! unique; lookups return the first match.

use crate::models::Record;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised when reading from the store.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum StoreError {
    /// No record with the requested name exists.
    #[error("record not found: {name}")]
    RecordNotFound { name: String },
}

/// Ordered collection of records.
#[derive(Debug, Clone, Default)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, taking ownership of it.
    pub fn insert(&mut self, record: Record) {
        debug!("Inserting record: {}", record);
        self.records.push(record);
    }

    /// Find the first record named `name`.
    ///
    /// Returns `None` when nothing matches; callers must handle that case
    /// before touching the record.
    pub fn lookup(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl Extend<Record> for Store {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for Store {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        store
    }
}
