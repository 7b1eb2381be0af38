//! Record reporting.
//!
//! Looks records up by name and renders them for output.

pub mod generator;

pub use generator::*;

use crate::models::{Report, ReportSummary};
use crate::store::{Store, StoreError};
use tracing::debug;

/// Looks up names in a store and reports the matching record.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    store: &'a Store,
}

impl<'a> Reporter<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Report the first record named `name`.
    ///
    /// A missing record is returned as `StoreError::RecordNotFound`
    /// rather than touched.
    pub fn report(&self, name: &str) -> Result<Report, StoreError> {
        debug!("Looking up record: {}", name);

        let record = self
            .store
            .lookup(name)
            .ok_or_else(|| StoreError::RecordNotFound {
                name: name.to_string(),
            })?;

        Ok(Report::from(record))
    }

    /// Report every name in order, collecting misses instead of stopping.
    pub fn report_all<I, S>(&self, names: I) -> ReportSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = ReportSummary::default();

        for name in names {
            let name = name.as_ref();
            match self.report(name) {
                Ok(report) => summary.found.push(report),
                Err(e) => {
                    debug!("Lookup missed: {}", e);
                    summary.missing.push(e);
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_store() -> Store {
        let mut store = Store::new();
        store.insert(Record::new("item1", 10));
        store.insert(Record::new("item2", 20));
        store
    }

    #[test]
    fn test_report_present() {
        let store = sample_store();
        let reporter = Reporter::new(&store);

        let report = reporter.report("item1").unwrap();
        assert_eq!(report.name, "item1");
        assert_eq!(report.value, 10);
        assert_eq!(report.to_string(), "Processing data: item1, value: 10");
    }

    #[test]
    fn test_report_missing_is_error() {
        let store = sample_store();
        let reporter = Reporter::new(&store);

        let err = reporter.report("item3").unwrap_err();
        assert_eq!(
            err,
            StoreError::RecordNotFound {
                name: "item3".to_string()
            }
        );
    }

    #[test]
    fn test_report_on_empty_store() {
        let store = Store::new();
        assert!(Reporter::new(&store).report("item1").is_err());
    }

    #[test]
    fn test_report_all_continues_after_miss() {
        let store = sample_store();
        let reporter = Reporter::new(&store);

        let summary = reporter.report_all(["item1", "item3", "item2"]);
        let found: Vec<&str> = summary.found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(found, vec!["item1", "item2"]);
        assert_eq!(
            summary.missing,
            vec![StoreError::RecordNotFound {
                name: "item3".to_string()
            }]
        );
        assert!(summary.has_missing());
    }

    #[test]
    fn test_report_all_empty_names() {
        let store = sample_store();
        let summary = Reporter::new(&store).report_all(Vec::<String>::new());
        assert!(summary.found.is_empty());
        assert!(!summary.has_missing());
    }
}
