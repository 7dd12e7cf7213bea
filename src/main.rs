// SPDX-License-Identifier: MPL-2.0
use exif_locator::app::{self, cli, Command, Options};
use exif_locator::media::ExifGpsReader;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match cli::parse_env() {
        Ok(Command::Run(flags)) => flags,
        Ok(Command::Help) => {
            print!("{}", cli::HELP);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!("{err}");
            eprint!("{}", cli::HELP);
            return ExitCode::FAILURE;
        }
    };

    let config = match app::load_config(&flags) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options::resolve(flags, config);
    match app::run(&options, &ExifGpsReader::new()) {
        Ok(summary) => {
            info!(
                files = summary.files_scanned,
                records = summary.records_found,
                report_written = summary.report_written,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
