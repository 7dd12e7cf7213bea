// SPDX-License-Identifier: MPL-2.0
//! Scan pipeline orchestration.
//!
//! [`run`] drives the three stages in order: list the files under the root,
//! extract a record from each, and write the report. Settings come from
//! [`Options`], resolved from command-line [`Flags`](cli::Flags) layered over
//! the settings file and built-in defaults.

pub mod cli;

use crate::application::port::metadata::GpsReader;
use crate::config::{self, Config};
use crate::directory_scanner;
use crate::error::Result;
use crate::media::collect_records;
use crate::report::{self, OutputFormat};
use std::path::PathBuf;
use tracing::{error, info};

pub use cli::{Command, Flags};

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub output_file: PathBuf,
    pub template: PathBuf,
}

impl Options {
    /// Layers command-line flags over the settings file over the defaults.
    pub fn resolve(flags: Flags, config: Config) -> Self {
        let format = flags
            .output_format
            .or(config.output_format)
            .unwrap_or_else(|| config::DEFAULT_OUTPUT_FORMAT.to_string());

        Self {
            root: flags
                .path
                .or(config.path)
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_ROOT)),
            format: OutputFormat::parse(&format),
            output_file: flags
                .output_file
                .or(config.output_file)
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_OUTPUT_FILE)),
            template: flags
                .template
                .or(config.template)
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_TEMPLATE_PATH)),
        }
    }
}

/// Loads the settings file named by `--config`, or the default one.
pub fn load_config(flags: &Flags) -> Result<Config> {
    match &flags.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files_scanned: usize,
    pub records_found: usize,
    pub report_written: bool,
}

/// Runs one scan.
///
/// # Errors
///
/// Fails if the root cannot be listed or if the report error is fatal
/// (HTML). A failed CSV write is logged and reported through
/// [`Summary::report_written`] instead.
pub fn run<R>(options: &Options, reader: &R) -> Result<Summary>
where
    R: GpsReader + ?Sized,
{
    info!(root = %options.root.display(), format = %options.format, "scanning");

    let files = directory_scanner::list_files(&options.root)?;
    let records = collect_records(reader, &files);

    info!(
        files = files.len(),
        records = records.len(),
        "scan complete"
    );

    let report_written = match report::write_report(
        &records,
        &options.output_file,
        &options.format,
        &options.template,
    ) {
        Ok(()) => true,
        Err(err) if err.is_fatal() => return Err(err.into()),
        Err(err) => {
            error!(
                format = %options.format,
                destination = %options.output_file.display(),
                error = %err,
                "failed to write report"
            );
            false
        }
    };

    Ok(Summary {
        files_scanned: files.len(),
        records_found: records.len(),
        report_written,
    })
}
