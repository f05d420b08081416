//! # Constants
//!
//! Default values and environment variable names shared by the examples.

/// Log filter used when neither `RUST_LOG` nor `AWS_DOC_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "aws_doc_examples=info";

/// Environment variable overriding the region resolved by the SDK
pub const ENV_REGION: &str = "AWS_DOC_REGION";

/// Environment variable overriding the service endpoint (for a local mock, for example)
pub const ENV_ENDPOINT_URL: &str = "AWS_DOC_ENDPOINT_URL";

/// Environment variable holding the log filter
pub const ENV_LOG_FILTER: &str = "AWS_DOC_LOG";

/// Endpoint type used by `describe_endpoint` when the caller gives none.
/// ATS-signed data endpoints are the recommended choice.
pub const DEFAULT_IOT_ENDPOINT_TYPE: &str = "iot:Data-ATS";
