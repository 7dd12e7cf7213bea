// SPDX-License-Identifier: MPL-2.0
//! HTML report writer.
//!
//! Renders the records through an external `minijinja` template. The
//! records are bound as `records`, each with `path`, `latitude` and
//! `longitude`. Output is HTML-escaped.

use super::{ReportError, ReportRow};
use crate::domain::metadata::GpsRecord;
use minijinja::{context, Environment};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name the template is registered under. The `.html` suffix turns on
/// HTML auto-escaping.
const TEMPLATE_NAME: &str = "report.html";

/// Renders `records` with the template at `template_path` into
/// `destination`.
///
/// The destination must already exist; it is opened read-write and its
/// previous content replaced.
///
/// # Errors
///
/// Returns [`ReportError::Template`] if the template cannot be read, parsed
/// or rendered and [`ReportError::Destination`] if the destination cannot
/// be opened. Both are fatal.
pub fn write(
    records: &[GpsRecord],
    template_path: &Path,
    destination: &Path,
) -> Result<(), ReportError> {
    let source = fs::read_to_string(template_path).map_err(|e| {
        ReportError::Template(format!(
            "cannot read template {}: {e}",
            template_path.display()
        ))
    })?;

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, &source)
        .map_err(|e| ReportError::Template(e.to_string()))?;
    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| ReportError::Template(e.to_string()))?;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .truncate(true)
        .open(destination)
        .map_err(|e| {
            ReportError::Destination(format!("cannot open {}: {e}", destination.display()))
        })?;

    let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();
    let mut out = BufWriter::new(file);
    template
        .render_to_write(context! { records => rows }, &mut out)
        .map_err(|e| ReportError::Template(e.to_string()))?;
    out.flush()
        .map_err(|e| ReportError::Destination(e.to_string()))?;
    Ok(())
}
