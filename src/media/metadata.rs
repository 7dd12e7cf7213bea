// SPDX-License-Identifier: MPL-2.0
//! GPS metadata extraction for images (EXIF).
//!
//! [`ExifGpsReader`] implements the [`GpsReader`] port with `kamadak-exif`.
//! It reads the EXIF segment out of JPEG, TIFF, PNG, WebP and HEIF
//! containers and decodes the GPS IFD into decimal degrees.

use crate::application::port::metadata::{GpsReader, MetadataError};
use crate::domain::metadata::GpsCoordinates;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Message `kamadak-exif` 0.6 uses when the file matches no known container.
///
/// The library has no dedicated error variant for this case, so the text is
/// matched. `kamadak_exif_still_reports_unknown_container` fails if an
/// upgrade changes the wording.
const UNKNOWN_CONTAINER: &str = "Unknown image format";

/// Reads GPS coordinates with `kamadak-exif`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifGpsReader;

impl ExifGpsReader {
    pub fn new() -> Self {
        Self
    }
}

impl GpsReader for ExifGpsReader {
    fn read_gps(&self, path: &Path) -> Result<Option<GpsCoordinates>, MetadataError> {
        let file = File::open(path).map_err(|e| MetadataError::IoError(e.to_string()))?;
        let mut reader = BufReader::new(file);

        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            // No EXIF segment in a known container, or not an image at all
            Err(exif::Error::NotFound(_)) => return Ok(None),
            Err(exif::Error::InvalidFormat(msg)) if msg == UNKNOWN_CONTAINER => return Ok(None),
            Err(exif::Error::Io(e)) => return Err(MetadataError::IoError(e.to_string())),
            Err(e) => return Err(MetadataError::CorruptedMetadata(e.to_string())),
        };

        extract_gps_coordinates(&exif)
    }
}

/// Extract GPS coordinates from parsed EXIF data.
///
/// Both the coordinate and its hemisphere reference must be present for
/// each axis; otherwise the image is treated as having no location.
fn extract_gps_coordinates(exif: &exif::Exif) -> Result<Option<GpsCoordinates>, MetadataError> {
    let latitude = read_axis(exif, exif::Tag::GPSLatitude, exif::Tag::GPSLatitudeRef, 'S')?;
    let longitude = read_axis(exif, exif::Tag::GPSLongitude, exif::Tag::GPSLongitudeRef, 'W')?;

    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Ok(Some(GpsCoordinates::new(lat, lon))),
        _ => Ok(None),
    }
}

/// Reads one signed axis. `negative_ref` is the hemisphere letter that
/// flips the sign ('S' for latitude, 'W' for longitude).
fn read_axis(
    exif: &exif::Exif,
    value_tag: exif::Tag,
    ref_tag: exif::Tag,
    negative_ref: char,
) -> Result<Option<f64>, MetadataError> {
    let (Some(value_field), Some(ref_field)) = (
        exif.get_field(value_tag, exif::In::PRIMARY),
        exif.get_field(ref_tag, exif::In::PRIMARY),
    ) else {
        return Ok(None);
    };

    let degrees = parse_gps_coordinate(&value_field.value).ok_or_else(|| {
        MetadataError::InvalidField {
            field: value_tag.to_string(),
            reason: "expected finite degrees, minutes and seconds".to_string(),
        }
    })?;

    let hemisphere = ref_field.display_value().to_string();
    Ok(Some(if hemisphere.contains(negative_ref) {
        -degrees
    } else {
        degrees
    }))
}

/// Parse GPS coordinate from EXIF rational values (degrees, minutes, seconds).
fn parse_gps_coordinate(value: &exif::Value) -> Option<f64> {
    match value {
        exif::Value::Rational(rationals) if rationals.len() >= 3 => {
            let degrees = rationals[0].to_f64();
            let minutes = rationals[1].to_f64();
            let seconds = rationals[2].to_f64();
            let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
            decimal.is_finite().then_some(decimal)
        }
        _ => None,
    }
}
