//! # Example Error Types
//!
//! A single error type for every example. The AWS SDK error is collapsed into
//! the operation name, the service error code (when the service sent one) and a
//! human-readable message.

use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ExampleError>;

/// Error reported by an example
#[derive(Debug, Error)]
pub enum ExampleError {
    /// The remote call reported a failure
    #[error("{operation}: {message}")]
    Service {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },
    /// The request could not be built from the caller's input
    #[error("{operation}: invalid request: {message}")]
    InvalidRequest {
        operation: &'static str,
        message: String,
    },
    /// Local setup failed before any request was sent
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExampleError {
    /// Convert an SDK operation error.
    ///
    /// Callers pass the error after `SdkError::into_service_error`, so transport
    /// and timeout failures arrive here as the operation's unhandled variant.
    /// The service message is preferred; without one the `Display` text of the
    /// error and its sources is used.
    pub fn from_sdk<E>(operation: &'static str, err: E) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error,
    {
        let code = err.code().map(str::to_string);
        let message = err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| display_chain(&err));

        Self::Service {
            operation,
            code,
            message,
        }
    }

    /// Wrap a request builder failure
    pub fn invalid_request(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::InvalidRequest {
            operation,
            message: err.to_string(),
        }
    }

    /// Message without the operation prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Service { message, .. }
            | Self::InvalidRequest { message, .. }
            | Self::Config(message) => message,
        }
    }

    /// Service error code, if the service sent one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => code.as_deref(),
            Self::InvalidRequest { .. } | Self::Config(_) => None,
        }
    }
}

/// Join an error and its sources with `": "`, skipping a source whose text
/// is already part of the message.
fn display_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_smithy_types::error::ErrorMetadata;

    #[derive(Debug)]
    struct FakeError {
        meta: ErrorMetadata,
        source: Option<std::io::Error>,
    }

    impl std::fmt::Display for FakeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("unhandled error")
        }
    }

    impl std::error::Error for FakeError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.source
                .as_ref()
                .map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    impl ProvideErrorMetadata for FakeError {
        fn meta(&self) -> &ErrorMetadata {
            &self.meta
        }
    }

    #[test]
    fn test_from_sdk_uses_service_message() {
        let err = FakeError {
            meta: ErrorMetadata::builder()
                .code("ResourceNotFoundException")
                .message("Could not find certificate")
                .build(),
            source: None,
        };

        let converted = ExampleError::from_sdk("RemoveTagsFromCertificate", err);
        assert_eq!(converted.code(), Some("ResourceNotFoundException"));
        assert_eq!(converted.message(), "Could not find certificate");
        assert_eq!(
            converted.to_string(),
            "RemoveTagsFromCertificate: Could not find certificate"
        );
    }

    #[test]
    fn test_from_sdk_falls_back_to_display_text() {
        let err = FakeError {
            meta: ErrorMetadata::builder().build(),
            source: None,
        };

        let converted = ExampleError::from_sdk("CreateThing", err);
        assert!(converted.code().is_none());
        assert_eq!(converted.message(), "unhandled error");
    }

    #[test]
    fn test_from_sdk_fallback_joins_sources_without_debug_output() {
        let err = FakeError {
            meta: ErrorMetadata::builder().build(),
            source: Some(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        };

        let converted = ExampleError::from_sdk("ListThings", err);
        assert_eq!(converted.message(), "unhandled error: connection refused");
        assert!(!converted.message().contains("Unhandled"));
        assert!(!converted.message().contains('{'));
    }

    #[test]
    fn test_display_chain_skips_repeated_source_text() {
        let err = FakeError {
            meta: ErrorMetadata::builder().build(),
            source: Some(std::io::Error::other("unhandled error")),
        };

        assert_eq!(display_chain(&err), "unhandled error");
    }

    #[test]
    fn test_invalid_request_error() {
        let err = ExampleError::invalid_request("AddTagsToCertificate", "key was not specified");
        assert_eq!(err.message(), "key was not specified");
        assert_eq!(
            err.to_string(),
            "AddTagsToCertificate: invalid request: key was not specified"
        );
    }

    #[test]
    fn test_config_error() {
        let err = ExampleError::Config("no region".to_string());
        assert_eq!(err.message(), "no region");
        assert!(err.code().is_none());
        assert_eq!(err.to_string(), "configuration error: no region");
    }
}
