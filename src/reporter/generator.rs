//! Report rendering.
//!
//! Turns reports and store contents into text or JSON output.

use crate::cli::OutputFormat;
use crate::models::{Record, Report, ReportSummary};
use anyhow::Result;

/// Render a single report line.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string(report).map_err(Into::into),
    }
}

/// Render a batch of reports.
///
/// Text output holds one line per found record; misses go to stderr
/// separately. JSON output is a single document with both found reports
/// and misses.
pub fn render_summary(summary: &ReportSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for report in &summary.found {
                output.push_str(&render_report(report, format)?);
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(summary)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render the full store contents.
pub fn render_records<'a, I>(records: I, format: OutputFormat) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for record in records {
                output.push_str(&format!("- {}\n", record));
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let records: Vec<&Record> = records.into_iter().collect();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        }
    }
}
