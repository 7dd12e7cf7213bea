// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the scanning pipeline stays
//! independent of the metadata library behind it.
//!
//! # Available Ports
//!
//! - [`metadata`]: GPS coordinate reading

pub mod metadata;

pub use metadata::{GpsReader, MetadataError};
