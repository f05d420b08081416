//! Mock HTTP endpoint for example tests
//!
//! A lightweight Axum server standing in for an AWS service. Tests queue canned
//! responses (usually a JSON body read from a fixture file), point the SDK at
//! the server with [`MockHttp::sdk_config`], and inspect the requests the SDK
//! sent.
//!
//! The server answers every method and path with the next queued response.
//! It performs no retry, caching or protocol negotiation of its own.

pub mod errors;
pub mod fixtures;
pub mod server;

pub use errors::{aws_error_body, aws_error_types};
pub use fixtures::load_fixture;
pub use server::{MockHttp, MockResponse, RecordedRequest, MOCK_REGION};
