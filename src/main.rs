//! process-json - ABI-encodes fields of an NFT metadata JSON fixture.
//!
//! Example, from the project root:
//!
//! ```text
//! process-json ./test-ffi/tmp/temp.json --attribute 1
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fixture_abi::fixture::DEFAULT_JSON_PATH;
use fixture_abi::logging::{self, Verbosity};
use fixture_abi::{process_file, AbiEncode, FixtureRequest, FixtureResult, Mode};

/// Encode NFT metadata fields as an ABI `(string,string,string)` tuple
#[derive(Parser, Debug)]
#[command(name = "process-json")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON fixture path
    #[arg(default_value = DEFAULT_JSON_PATH)]
    path: PathBuf,

    /// Encode name, description and image (default)
    #[arg(long, conflicts_with = "attribute")]
    top_level: bool,

    /// Encode trait_type, value and display_type of one attribute
    #[arg(long)]
    attribute: bool,

    /// Attribute index, used with --attribute
    #[arg(default_value_t = 0)]
    index: usize,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value_t = Verbosity::default())]
    verbosity: Verbosity,
}

impl Args {
    fn request(&self) -> FixtureRequest {
        let mode = if self.attribute {
            Mode::Attribute { index: self.index }
        } else {
            Mode::TopLevel
        };
        FixtureRequest::new(self.path.clone(), mode)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbosity);

    if let Err(e) = run(&args.request()) {
        error!("Encoding failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(request: &FixtureRequest) -> FixtureResult<()> {
    let response = process_file(request)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(response.to_hex().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
