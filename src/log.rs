//! Logging bootstrap for embedding hosts and tests.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a global tracing subscriber scoped to this crate.
///
/// `RUST_LOG` wins when set; otherwise `verbose` toggles debug output for
/// the `fxtool` target. Does nothing if the embedding host already
/// installed a subscriber of its own.
pub fn init_logging(verbose: bool) {
    let directive = if verbose { "fxtool=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().compact().without_time())
        .with(filter)
        .try_init();
}
