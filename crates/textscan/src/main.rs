//! textscan: print the text lines of an image as JSON.

mod cli;
mod output;
mod scan;

use clap::Parser;
use textscan_engine::{resolve_models_dir, EngineOptions, OcrsEngine, Result};
use textscan_protocol::Envelope;
use tracing::{error, Level};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Format};
use output::Output;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the result.
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.format);
    let (envelope, code) = outcome(run(&cli), cli.format);

    if let Err(e) = output.print_envelope(&envelope) {
        error!("Failed to write output: {:#}", e);
        std::process::exit(1);
    }

    if code != 0 {
        std::process::exit(code);
    }
}

/// Build the engine once and scan the requested image.
fn run(cli: &Cli) -> Result<Envelope> {
    let models_dir = resolve_models_dir(cli.models_dir().as_deref())?;
    let engine = OcrsEngine::new(&models_dir, EngineOptions::default())?;
    scan::scan_with(&engine, &cli.image_path())
}

/// Log filter: `RUST_LOG` when set, otherwise `warn`, or `debug` with `-v`.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Envelope to print and process exit code.
///
/// An envelope, even a failed one, exits 0. An engine that could not be
/// built or started yields a failure envelope and exit code 1.
fn outcome(result: Result<Envelope>, format: Format) -> (Envelope, i32) {
    match result {
        Ok(envelope) => (envelope, 0),
        Err(e) => {
            // Text output already reports the failure on stderr.
            if format == Format::Json {
                error!("{}", e);
            }
            (Envelope::failure(e.to_string()), 1)
        }
    }
}
