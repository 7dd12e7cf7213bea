// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no external dependencies.
//!
//! # Modules
//!
//! - [`metadata`]: Location types ([`GpsCoordinates`](metadata::GpsCoordinates),
//!   [`GpsRecord`](metadata::GpsRecord))

pub mod metadata;
