//! Data models for the record store.
//!
//! This module contains the record type held by the store and the
//! report produced when a record is looked up.

use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single name/value pair.
///
/// Fields are private so a record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    value: i64,
}

impl Record {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Name the record is looked up by.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, value: {}", self.name, self.value)
    }
}

/// Output of a successful report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Name of the reported record.
    pub name: String,
    /// Value of the reported record.
    pub value: i64,
}

impl From<&Record> for Report {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            value: record.value(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processing data: {}, value: {}", self.name, self.value)
    }
}

/// Results of reporting a batch of names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSummary {
    /// Reports for names that were found, in request order.
    pub found: Vec<Report>,
    /// Lookups with no matching record, in request order.
    pub missing: Vec<StoreError>,
}

impl ReportSummary {
    /// Returns true if any requested name had no record.
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}
