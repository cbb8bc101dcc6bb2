//! Tracing setup shared by the command-line tools.
//!
//! Logs always go to stderr; stdout is reserved for the encoded payload.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Verbosity {
    /// Only log warnings and failures.
    #[default]
    Quiet,
    /// Log the file read and the selected fields.
    Normal,
    /// Log everything, including encoding details.
    Verbose,
}

impl Verbosity {
    /// Returns the tracing filter string for this verbosity level.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "fixture_abi=warn",
            Verbosity::Normal => "fixture_abi=info",
            Verbosity::Verbose => "fixture_abi=trace",
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`.
pub fn init(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.as_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
