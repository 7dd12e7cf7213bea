// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing.

use crate::error::{Error, Result};
use pico_args::Arguments;
use std::path::PathBuf;

pub const HELP: &str = "\
exif_locator - report GPS coordinates embedded in image metadata

USAGE:
  exif_locator [OPTIONS]

OPTIONS:
  --path <DIR>            Root directory to scan (recursively)
  --output-format <FMT>   Report format: csv or html
  --output-file <FILE>    Report destination (must already exist for html)
  --template <FILE>       HTML template to render
  --config <FILE>         Settings file to use instead of the default one
  -h, --help              Print this help
  -V, --version           Print the version

Unset options fall back to settings.toml, then to built-in defaults.
Log verbosity is controlled with RUST_LOG (default: info).
";

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    pub path: Option<PathBuf>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
    pub template: Option<PathBuf>,
    /// Explicit settings file, replacing the platform default location.
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Flags),
    Help,
    Version,
}

/// Parses the process arguments.
pub fn parse_env() -> Result<Command> {
    parse(Arguments::from_env())
}

/// Parses an argument list. Unknown arguments are rejected.
pub fn parse(mut args: Arguments) -> Result<Command> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if args.contains(["-V", "--version"]) {
        return Ok(Command::Version);
    }

    let flags = Flags {
        path: args.opt_value_from_str("--path")?,
        output_format: args.opt_value_from_str("--output-format")?,
        output_file: args.opt_value_from_str("--output-file")?,
        template: args.opt_value_from_str("--template")?,
        config: args.opt_value_from_str("--config")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        let unexpected: Vec<String> = remaining
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(Error::Args(format!(
            "unexpected arguments: {}",
            unexpected.join(" ")
        )));
    }

    Ok(Command::Run(flags))
}
