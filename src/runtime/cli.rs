//! # Command-Line Plumbing
//!
//! Examples take positional arguments only. A usage error prints the usage and
//! exits with status 1; `--help` and `--version` exit with status 0.

use std::ffi::OsString;

use clap::Parser;

/// Exit status for a usage error
pub const EXIT_USAGE: u8 = 1;

/// Parse the process arguments
///
/// # Errors
///
/// Returns the exit status the binary should terminate with when the
/// arguments were not runnable (usage error, `--help`, `--version`).
pub fn parse_args<T: Parser>() -> Result<T, u8> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator; the first item is the program name
///
/// # Errors
///
/// See [`parse_args`].
pub fn parse_args_from<T, I, A>(args: I) -> Result<T, u8>
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    T::try_parse_from(args).map_err(|e| {
        let status = if e.use_stderr() { EXIT_USAGE } else { 0 };
        if let Err(print_err) = e.print() {
            tracing::warn!("Failed to print usage: {}", print_err);
        }
        status
    })
}
