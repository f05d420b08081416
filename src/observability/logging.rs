//! # Logging
//!
//! `tracing` subscriber setup. Logs go to stderr so stdout carries only the
//! example's own output.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the env filter. `RUST_LOG` wins over the configured fallback.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, which is expected
/// when several examples run inside one test binary.
pub fn init_logging(fallback_filter: &str) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if !installed {
        debug!("Tracing subscriber already initialized, keeping the existing one");
    }

    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let _ = init_logging("debug");
        assert!(!init_logging("info"));
    }

    #[test]
    fn test_invalid_fallback_filter_does_not_panic() {
        let _filter = env_filter("[[not a filter");
    }
}
