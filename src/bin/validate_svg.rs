//! validate-svg - checks an SVG fixture and ABI-encodes `(isValid, svg)`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fixture_abi::logging::{self, Verbosity};
use fixture_abi::svg::DEFAULT_SVG_PATH;
use fixture_abi::{validate_file, AbiEncode, FixtureResult};

/// Validate an SVG fixture and encode the result as an ABI `(bool,string)` tuple
#[derive(Parser, Debug)]
#[command(name = "validate-svg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SVG fixture path
    #[arg(default_value = DEFAULT_SVG_PATH)]
    path: PathBuf,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value_t = Verbosity::default())]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbosity);

    if let Err(e) = run(&args.path) {
        error!("Validation failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(path: &Path) -> FixtureResult<()> {
    let report = validate_file(path)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.to_hex().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
