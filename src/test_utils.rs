// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and EXIF fixtures.
//!
//! Re-exports `approx`'s absolute-difference assertion and builds small TIFF
//! files carrying GPS tags, so tests don't depend on checked-in images.

// Re-export approx macro for convenient use in tests
pub use approx::assert_abs_diff_eq;

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;
use std::path::Path;

/// Tolerance for decimal-degree comparisons after a DMS round trip.
pub const GPS_EPSILON: f64 = 1e-6;

/// Splits an unsigned decimal degree value into degrees/minutes/seconds
/// rationals, with seconds kept to four decimal places.
pub fn to_dms(value: f64) -> Vec<Rational> {
    let value = value.abs();
    let degrees = value.trunc();
    let minutes_full = (value - degrees) * 60.0;
    let minutes = minutes_full.trunc();
    let seconds = (minutes_full - minutes) * 60.0;
    vec![
        Rational { num: degrees as u32, denom: 1 },
        Rational { num: minutes as u32, denom: 1 },
        Rational { num: (seconds * 10_000.0).round() as u32, denom: 10_000 },
    ]
}

/// Builds the four GPS fields for a signed latitude/longitude pair.
pub fn gps_fields(latitude: f64, longitude: f64) -> Vec<Field> {
    let lat_ref: &[u8] = if latitude < 0.0 { b"S" } else { b"N" };
    let lon_ref: &[u8] = if longitude < 0.0 { b"W" } else { b"E" };
    vec![
        Field {
            tag: Tag::GPSLatitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![lat_ref.to_vec()]),
        },
        Field {
            tag: Tag::GPSLatitude,
            ifd_num: In::PRIMARY,
            value: Value::Rational(to_dms(latitude)),
        },
        Field {
            tag: Tag::GPSLongitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![lon_ref.to_vec()]),
        },
        Field {
            tag: Tag::GPSLongitude,
            ifd_num: In::PRIMARY,
            value: Value::Rational(to_dms(longitude)),
        },
    ]
}

/// Writes a TIFF file containing an image description plus `extra` fields.
pub fn write_tiff(path: &Path, extra: &[Field]) {
    let description = Field {
        tag: Tag::ImageDescription,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![b"fixture".to_vec()]),
    };

    let mut writer = Writer::new();
    writer.push_field(&description);
    for field in extra {
        writer.push_field(field);
    }

    let mut buf = Cursor::new(Vec::new());
    writer
        .write(&mut buf, false)
        .expect("failed to encode TIFF fixture");
    std::fs::write(path, buf.into_inner()).expect("failed to write TIFF fixture");
}

/// Writes a TIFF file tagged with the given signed coordinates.
pub fn write_gps_tiff(path: &Path, latitude: f64, longitude: f64) {
    write_tiff(path, &gps_fields(latitude, longitude));
}
