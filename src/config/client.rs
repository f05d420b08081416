//! # Client Configuration
//!
//! Region, endpoint and logging settings shared by every example program.

use crate::constants::{DEFAULT_LOG_FILTER, ENV_ENDPOINT_URL, ENV_LOG_FILTER, ENV_REGION};

/// Configuration applied on top of the SDK's default configuration chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Region override. `None` lets the SDK resolve it from the environment or profile.
    pub region: Option<String>,
    /// Endpoint override, e.g. `http://127.0.0.1:4566` for a local mock
    pub endpoint_url: Option<String>,
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            region: non_blank(ENV_REGION),
            endpoint_url: non_blank(ENV_ENDPOINT_URL),
            log_filter: non_blank(ENV_LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Override the region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the service endpoint
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.log_filter, "aws_doc_examples=info");
    }

    #[test]
    fn test_reads_all_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AWS_DOC_REGION", "eu-west-1"),
            ("AWS_DOC_ENDPOINT_URL", "http://localhost:4566"),
            ("AWS_DOC_LOG", "debug"),
        ]));

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AWS_DOC_REGION", "   "),
            ("AWS_DOC_ENDPOINT_URL", ""),
            ("AWS_DOC_LOG", " "),
        ]));

        assert!(config.region.is_none());
        assert!(config.endpoint_url.is_none());
        assert_eq!(config.log_filter, "aws_doc_examples=info");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_region("us-east-1")
            .with_endpoint_url("http://127.0.0.1:9000");

        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://127.0.0.1:9000"));
    }
}
