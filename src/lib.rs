// SPDX-License-Identifier: MPL-2.0
//! `exif_locator` scans a directory tree for images and reports the GPS
//! coordinates embedded in their EXIF metadata, as CSV or rendered HTML.
//!
//! The pipeline is linear and single-threaded: [`directory_scanner`] lists
//! the files, [`media`] extracts one [`GpsRecord`](domain::metadata::GpsRecord)
//! per located image, and [`report`] writes the result. [`app::run`] ties
//! the stages together.

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod media;
pub mod report;

#[cfg(test)]
pub mod test_utils;
