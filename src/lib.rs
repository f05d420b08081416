//! AWS SDK Example Library
//!
//! Shared pieces behind the `run_*` example programs: client configuration,
//! SDK init/teardown, console reporting, and one module per AWS service.
//!
//! Every example follows the same shape: build one request, send it, print one
//! line describing the outcome, and hand a success flag back to the caller.

pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod observability;
pub mod provider;
pub mod runtime;

pub use config::ClientConfig;
pub use console::Console;
pub use error::{ExampleError, Result};
