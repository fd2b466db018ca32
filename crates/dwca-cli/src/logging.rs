//! Logging setup using `tracing` and `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber: compact single-line output on stderr,
/// no timestamps, level driven by `--verbose` unless `RUST_LOG` overrides.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dwca={level},dwca_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .compact()
        .init();
}
