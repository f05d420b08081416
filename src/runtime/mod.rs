//! # Runtime
//!
//! SDK init/teardown and command-line plumbing shared by the example binaries.
//!
//! - `initialization`: loads the SDK configuration and sets up logging
//! - `cli`: argument parsing with the examples' exit code conventions

pub mod cli;
pub mod initialization;

pub use cli::{parse_args, parse_args_from, EXIT_USAGE};
pub use initialization::{initialize, load_sdk_config, ExampleRuntime};
