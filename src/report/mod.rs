// SPDX-License-Identifier: MPL-2.0
//! Report writing.
//!
//! The collected records are either serialized to CSV ([`csv`]) or rendered
//! through an HTML template ([`html`]). The two formats fail differently:
//! CSV errors are recoverable while HTML errors are fatal, see
//! [`ReportError::is_fatal`].

pub mod csv;
pub mod html;

use crate::domain::metadata::GpsRecord;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors produced while writing a report.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// Writing the CSV destination failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding the records as CSV failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// The HTML template is missing, invalid, or failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// The HTML destination could not be opened.
    #[error("Destination error: {0}")]
    Destination(String),
}

impl ReportError {
    /// Returns `true` for errors that must terminate the program.
    ///
    /// HTML failures are fatal; CSV failures are only logged.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReportError::Template(_) | ReportError::Destination(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

/// Report format selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Html,
    /// Any other selector. Writing it produces no output.
    Unsupported(String),
}

impl OutputFormat {
    pub fn parse(selector: &str) -> Self {
        if selector.eq_ignore_ascii_case("csv") {
            OutputFormat::Csv
        } else if selector.eq_ignore_ascii_case("html") {
            OutputFormat::Html
        } else {
            OutputFormat::Unsupported(selector.to_string())
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Unsupported(other) => write!(f, "{other}"),
        }
    }
}

/// Serialized view of a record shared by both writers.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub path: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&GpsRecord> for ReportRow {
    fn from(record: &GpsRecord) -> Self {
        Self {
            path: record.path().display().to_string(),
            latitude: record.latitude(),
            longitude: record.longitude(),
        }
    }
}

/// Writes `records` to `destination` in the selected format.
///
/// `template` is only read for [`OutputFormat::Html`]. An unsupported format
/// leaves the destination untouched and returns `Ok(())`.
///
/// # Errors
///
/// See [`csv::write`] and [`html::write`].
pub fn write_report(
    records: &[GpsRecord],
    destination: &Path,
    format: &OutputFormat,
    template: &Path,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Csv => csv::write(records, destination)?,
        OutputFormat::Html => html::write(records, template, destination)?,
        OutputFormat::Unsupported(selector) => {
            warn!(format = %selector, "unsupported output format, no report written");
            return Ok(());
        }
    }

    info!(
        format = %format,
        destination = %destination.display(),
        records = records.len(),
        "report written"
    );
    Ok(())
}
