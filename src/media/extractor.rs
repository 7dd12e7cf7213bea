// SPDX-License-Identifier: MPL-2.0
//! Per-file GPS record extraction.
//!
//! Each file is read in isolation: an error or a panic from the metadata
//! reader is logged against that file's path and the file is skipped. The
//! remaining files are processed normally.

use crate::application::port::metadata::GpsReader;
use crate::domain::metadata::GpsRecord;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Reads one file and turns its coordinates into a record.
///
/// Returns `None` when the file has no location, when the reader fails,
/// or when the reader panics. Coordinates outside WGS84 bounds are kept
/// but logged.
pub fn extract_record<R>(reader: &R, path: &Path) -> Option<GpsRecord>
where
    R: GpsReader + ?Sized,
{
    match panic::catch_unwind(AssertUnwindSafe(|| reader.read_gps(path))) {
        Ok(Ok(Some(coordinates))) => {
            if !coordinates.is_valid() {
                warn!(
                    path = %path.display(),
                    latitude = coordinates.latitude(),
                    longitude = coordinates.longitude(),
                    "GPS coordinates out of range, reporting as read"
                );
            }
            Some(GpsRecord::new(path, coordinates))
        }
        Ok(Ok(None)) => {
            debug!(path = %path.display(), "no GPS metadata");
            None
        }
        Ok(Err(err)) => {
            warn!(path = %path.display(), error = %err, "failed to read metadata");
            None
        }
        Err(payload) => {
            error!(
                path = %path.display(),
                panic = %panic_message(payload.as_ref()),
                "recovered from panic while reading metadata"
            );
            None
        }
    }
}

/// Extracts records from every path in order, keeping only files with a
/// location.
pub fn collect_records<R>(reader: &R, paths: &[PathBuf]) -> Vec<GpsRecord>
where
    R: GpsReader + ?Sized,
{
    paths
        .iter()
        .filter_map(|path| extract_record(reader, path))
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
