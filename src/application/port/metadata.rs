// SPDX-License-Identifier: MPL-2.0
//! Metadata reading port definitions.
//!
//! This module defines the trait for reading GPS coordinates out of image
//! metadata. The infrastructure adapter implements it with `kamadak-exif`;
//! tests substitute their own readers.

use crate::domain::metadata::GpsCoordinates;
use std::path::Path;
use thiserror::Error;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while reading metadata from a single file.
///
/// None of these abort a scan: the extractor logs them and skips the file.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A metadata segment was found but could not be parsed.
    #[error("Corrupted metadata: {0}")]
    CorruptedMetadata(String),

    /// A GPS field was present with a value of the wrong shape.
    #[error("Invalid GPS field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

// =============================================================================
// GpsReader Trait
// =============================================================================

/// Port for reading GPS coordinates from image files.
///
/// The three steps behind it (locate the raw metadata segment, parse it into
/// a field index, look up the GPS sub-structure) belong to the adapter.
///
/// # Example
///
/// ```ignore
/// use exif_locator::application::port::metadata::GpsReader;
/// use std::path::Path;
///
/// fn show_location(reader: &impl GpsReader, path: &Path) {
///     if let Ok(Some(coords)) = reader.read_gps(path) {
///         println!("{}: {}, {}", path.display(), coords.latitude(), coords.longitude());
///     }
/// }
/// ```
pub trait GpsReader: Send + Sync {
    /// Reads the GPS coordinates embedded in a file.
    ///
    /// Returns `Ok(None)` when the file carries no metadata segment, is not
    /// a recognized image container, or has no GPS sub-structure.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be read or its
    /// metadata is malformed.
    fn read_gps(&self, path: &Path) -> Result<Option<GpsCoordinates>, MetadataError>;
}
