//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber once at startup
//! - Pick the default level from `--verbose`
//!
//! # Design Decisions
//! - Human-readable `fmt` output on stdout; warnings are part of normal output
//! - `RUST_LOG` always wins over the built-in default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "blockdx_confgen=debug"
    } else {
        "blockdx_confgen=info"
    }
}

/// Install the global subscriber.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbose).into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
