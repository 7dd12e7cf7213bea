// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for image location metadata with no external dependencies.

use std::path::{Path, PathBuf};

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees.
///
/// Latitude is negative south of the equator, longitude is negative west of
/// the prime meridian.
///
/// # Example
///
/// ```
/// use exif_locator::domain::metadata::GpsCoordinates;
///
/// let coords = GpsCoordinates::new(48.8566, 2.3522); // Paris
/// assert!(coords.is_valid());
/// assert!(!GpsCoordinates::new(48.8566, 200.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates new GPS coordinates from decimal degrees.
    ///
    /// Values are stored as read. Out-of-range values are kept so that a
    /// report reflects exactly what the file contained; use [`is_valid`]
    /// to check them.
    ///
    /// [`is_valid`]: GpsCoordinates::is_valid
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether both values are finite and within WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

// =============================================================================
// GpsRecord
// =============================================================================

/// One report row: a scanned file paired with the coordinates found in it.
///
/// Records are created once by the extractor and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsRecord {
    path: PathBuf,
    coordinates: GpsCoordinates,
}

impl GpsRecord {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, coordinates: GpsCoordinates) -> Self {
        Self {
            path: path.into(),
            coordinates,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn coordinates(&self) -> GpsCoordinates {
        self.coordinates
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }
}

// =============================================================================
// Tests
// =============================================================================
