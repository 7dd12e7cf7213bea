// SPDX-License-Identifier: MPL-2.0
//! CSV report writer.
//!
//! Produces a header row followed by one row per record, in collection
//! order. The header is written even when there are no records.

use super::{ReportError, ReportRow};
use crate::domain::metadata::GpsRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Column labels, in column order.
pub const HEADERS: [&str; 3] = [
    "image file path",
    "GPS position latitude",
    "GPS position longitude",
];

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err.to_string())
    }
}

/// Serializes the records to CSV text.
pub fn render(records: &[GpsRecord]) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(ReportRow::from(record))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
}

/// Writes the CSV report, creating or truncating `destination`.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if encoding fails and [`ReportError::Io`] if
/// the file cannot be written. Neither is fatal.
pub fn write(records: &[GpsRecord], destination: &Path) -> Result<(), ReportError> {
    let content = render(records)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o664);
    }

    let mut file = options.open(destination)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}
