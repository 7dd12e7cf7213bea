// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) implemented by infrastructure
//!
//! The domain layer holds the types, this layer defines the seams, and
//! `media` provides the adapters.

pub mod port;
