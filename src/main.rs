//! sha256base64 entrypoint.

mod artifact;
mod error;
mod hashing;
mod logging;
mod paths;
mod persist;

use clap::error::ErrorKind;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

use crate::error::CliError;
use crate::logging::{init_logging, LogConfig};
use crate::persist::persist;

const LONG_ABOUT: &str = "\
Calculates the SHA-256 sum of FILE and stores it next to it in several forms:
<base>.sha256bin (32 raw bytes), <base>.sha256 (hex), <base>.sha256b64 (base64)
and <base>.sha256bytes (base64 in a zero-filled 256-byte buffer).

openssl with PSS padding (v2) only accepts binary hashes of 32 bytes;
without PSS padding (v1) it is more tolerant.";

/// CLI arguments for the digest writer.
#[derive(Parser, Debug)]
#[command(
    name = "sha256base64",
    version,
    about = "Store the SHA-256 of a file as binary, hex and base64",
    long_about = LONG_ABOUT
)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// File to hash; outputs are written beside it
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            install_logging(LogConfig { debug: false });
            let _ = err.print();
            let reason = err.kind().as_str().unwrap_or("invalid arguments");
            return fail(&CliError::Options(reason.to_string()));
        }
    };

    install_logging(LogConfig { debug: args.debug });
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

/// Hash the input file and write every artifact, echoing each to stdout.
fn run(args: &Args) -> Result<(), CliError> {
    debug!("Debug is enabled.");
    let stdout = io::stdout();
    let report = persist(&args.file, &mut stdout.lock())?;
    info!(
        sha256 = %report.digest.to_hex(),
        basename = %report.basename.display(),
        artifacts = report.written.len(),
        "digest persisted"
    );
    Ok(())
}

fn install_logging(config: LogConfig) {
    if let Err(err) = init_logging(config) {
        eprintln!("warning: {err:#}");
    }
}

fn fail(err: &CliError) -> ExitCode {
    error!(step = err.step(), "{err}");
    ExitCode::from(err.exit_code())
}
