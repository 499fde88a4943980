//! Observability subsystem.
//!
//! Everything is emitted through `tracing`; logging.rs installs the
//! subscriber that prints it.

pub mod logging;

pub use logging::init_logging;
