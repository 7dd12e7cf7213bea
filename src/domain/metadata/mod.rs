// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! - [`GpsCoordinates`]: decimal-degree latitude/longitude pair
//! - [`GpsRecord`]: a scanned file paired with its coordinates

mod types;

pub use types::{GpsCoordinates, GpsRecord};
