//! # Console Output
//!
//! Every example writes exactly one line describing the outcome of its call:
//! success lines go to stdout, failure lines to stderr. `Console` owns both
//! writers so tests can capture what an example printed.

use std::io::{self, Write};

use tracing::warn;

use crate::error::ExampleError;

/// Output streams used by the examples
#[derive(Debug)]
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<io::Stdout, io::Stderr> {
    /// Console bound to the process stdout and stderr
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Console<Vec<u8>, Vec<u8>> {
    /// Console writing into in-memory buffers
    #[must_use]
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Everything written to stdout so far
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Everything written to stderr so far
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write one line to stdout
    pub fn out_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write to stdout: {}", e);
        }
    }

    /// Write one line to stderr
    pub fn err_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.err, "{line}") {
            warn!("Failed to write to stderr: {}", e);
        }
    }

    /// Print the outcome of a call and collapse it into a success flag.
    ///
    /// On success `on_success` produces the stdout line(s) from the output;
    /// on failure `on_failure` formats the stderr line from the error.
    pub fn report<T, S, F>(
        &mut self,
        outcome: &Result<T, ExampleError>,
        on_success: S,
        on_failure: F,
    ) -> bool
    where
        S: FnOnce(&mut Self, &T),
        F: FnOnce(&ExampleError) -> String,
    {
        match outcome {
            Ok(output) => {
                on_success(self, output);
                true
            }
            Err(e) => {
                let line = on_failure(e);
                self.err_line(&line);
                false
            }
        }
    }
}
