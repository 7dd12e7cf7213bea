// SPDX-License-Identifier: MPL-2.0
//! Image metadata handling.
//!
//! - [`metadata`]: the `kamadak-exif` adapter for the GPS reader port
//! - [`extractor`]: per-file record extraction with fault isolation

pub mod extractor;
pub mod metadata;

pub use extractor::{collect_records, extract_record};
pub use metadata::ExifGpsReader;
