//! Logging initialization for the command-line viewer.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `-v` flags win over the configured level.
pub fn log_filter(verbose: u8, configured_level: &str) -> String {
    match verbose {
        0 => configured_level.to_owned(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

/// Initialize tracing for the binary. Logs go to stderr so JSON output on stdout stays clean.
pub fn init_logging(verbose: u8, configured_level: &str) {
    let filter = EnvFilter::try_new(log_filter(verbose, configured_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    debug!("Logging initialized with verbosity {}", verbose);
}
