// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Used when neither the command line nor the settings file provides a
//! value.

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = ".";

/// Report format used when none is given.
pub const DEFAULT_OUTPUT_FORMAT: &str = "csv";

/// Report destination used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "gps-report.csv";

/// HTML template location, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "./html-templates/index.html";
