//! Shared helpers for the mock-backed example tests

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::path::PathBuf;

use aws_config::SdkConfig;
use mock_http::MockHttp;

/// Absolute path of a fixture under `tests/mock_input`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("mock_input")
        .join(name)
}

/// Start a mock server with one fixture queued
pub async fn mock_with_fixture(name: &str) -> (MockHttp, SdkConfig) {
    let mock = MockHttp::start().await.expect("mock server should start");
    mock.add_response_with_body(fixture(name))
        .unwrap_or_else(|e| panic!("precondition failed, fixture {name}: {e:#}"));
    let config = mock.sdk_config().await;
    (mock, config)
}

/// Start a mock server with one AWS error queued
pub async fn mock_with_error(status: u16, error_type: &str, message: &str) -> (MockHttp, SdkConfig) {
    let mock = MockHttp::start().await.expect("mock server should start");
    mock.add_error_response(status, error_type, message);
    let config = mock.sdk_config().await;
    (mock, config)
}
