//! # Observability
//!
//! Logging setup for the example programs.

pub mod logging;

pub use logging::init_logging;
