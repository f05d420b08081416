//! Mock server
//!
//! Serves queued responses in FIFO order and records every request it receives.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::errors::{aws_error_body, aws_error_types, ERROR_TYPE_HEADER};
use crate::fixtures::load_fixture;

/// Region baked into the SDK configuration returned by [`MockHttp::sdk_config`]
pub const MOCK_REGION: &str = "us-east-1";

/// A canned response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MockResponse {
    /// `200 OK` with a JSON body
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.into(),
        }
    }

    /// AWS-style JSON error
    pub fn aws_error(status: u16, error_type: &str, message: &str) -> Self {
        Self {
            status,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                (ERROR_TYPE_HEADER.to_string(), error_type.to_string()),
            ],
            body: aws_error_body(error_type, message).to_string(),
        }
    }
}

/// A request received by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names are lowercase
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Header value by (case-insensitive) name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body parsed as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn body_json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).context("Request body is not valid JSON")
    }

    /// Value of a query parameter, undecoded
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then_some(value)
        })
    }
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<MockResponse>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<MockState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, MockState> {
    // A panicking test thread must not hide the recorded requests from the others
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Local mock endpoint for one test
///
/// The server task is aborted when the value is dropped.
#[derive(Debug)]
pub struct MockHttp {
    addr: SocketAddr,
    state: SharedState,
    handle: JoinHandle<()>,
}

impl MockHttp {
    /// Start a server on an ephemeral localhost port
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start() -> Result<Self> {
        let state = SharedState::default();

        let app = Router::new()
            .fallback(handle_request)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind mock server listener")?;
        let addr = listener
            .local_addr()
            .context("Failed to read mock server address")?;

        info!("Mock HTTP server listening on {}", addr);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Mock HTTP server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:49152`
    pub fn endpoint_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Queue a `200` response whose body is read from a fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be read or is not valid JSON;
    /// nothing is queued in that case.
    pub fn add_response_with_body(&self, fixture: impl AsRef<Path>) -> Result<()> {
        let body = load_fixture(fixture)?;
        self.add_response(MockResponse::ok_json(body));
        Ok(())
    }

    /// Queue an AWS-style error response
    pub fn add_error_response(&self, status: u16, error_type: &str, message: &str) {
        self.add_response(MockResponse::aws_error(status, error_type, message));
    }

    /// Queue an arbitrary response
    pub fn add_response(&self, response: MockResponse) {
        debug!("Queued mock response with status {}", response.status);
        lock(&self.state).responses.push_back(response);
    }

    /// Number of queued responses not yet served
    pub fn pending_responses(&self) -> usize {
        lock(&self.state).responses.len()
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state).requests.clone()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.state).requests.last().cloned()
    }

    /// SDK configuration pointed at this server.
    ///
    /// Uses static test credentials, [`MOCK_REGION`] and no retries, so an
    /// error response reaches the caller after exactly one request.
    pub async fn sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(MOCK_REGION))
            .credentials_provider(Credentials::new(
                "AKIDMOCKHTTP",
                "mock-secret-key",
                None,
                None,
                "mock-http",
            ))
            .endpoint_url(self.endpoint_url())
            .retry_config(RetryConfig::disabled())
            .load()
            .await
    }
}

impl Drop for MockHttp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_request(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    info!("  {} {}", method, uri);

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body: body.to_vec(),
    };

    let next = {
        let mut guard = lock(&state);
        guard.requests.push(recorded);
        guard.responses.pop_front()
    };

    let response = next.unwrap_or_else(|| {
        warn!("  No mock response queued for {} {}", method, uri.path());
        MockResponse::aws_error(
            StatusCode::NOT_FOUND.as_u16(),
            aws_error_types::RESOURCE_NOT_FOUND,
            &format!("No mock response queued for {} {}", method, uri.path()),
        )
    });

    into_http_response(response)
}

fn into_http_response(response: MockResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut http_response = (status, response.body).into_response();
    for (name, value) in response.headers {
        match (
            axum::http::HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                http_response.headers_mut().insert(name, value);
            }
            _ => warn!("  Skipping invalid mock header {}: {}", name, value),
        }
    }

    http_response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_queued_responses_in_order() {
        let mock = MockHttp::start().await.unwrap();
        mock.add_response(MockResponse::ok_json(r#"{"n": 1}"#));
        mock.add_response(MockResponse::ok_json(r#"{"n": 2}"#));

        let client = reqwest::Client::new();
        let first: Value = client
            .get(format!("{}/a", mock.endpoint_url()))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let second: Value = client
            .post(format!("{}/b?x=1", mock.endpoint_url()))
            .body("{\"k\":\"v\"}")
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(first["n"], 1);
        assert_eq!(second["n"], 2);
        assert_eq!(mock.pending_responses(), 0);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/a");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].query_param("x"), Some("1"));
        assert_eq!(requests[1].body_json().unwrap()["k"], "v");
    }

    #[tokio::test]
    async fn test_empty_queue_answers_not_found() {
        let mock = MockHttp::start().await.unwrap();

        let response = reqwest::get(format!("{}/things/x", mock.endpoint_url()))
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(
            response
                .headers()
                .get("x-amzn-errortype")
                .and_then(|v| v.to_str().ok()),
            Some("ResourceNotFoundException")
        );
        let body: Value = response.json().await.unwrap();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("No mock response queued"));
    }

    #[tokio::test]
    async fn test_error_response_carries_type_and_message() {
        let mock = MockHttp::start().await.unwrap();
        mock.add_error_response(400, aws_error_types::INVALID_REQUEST, "Bad thing name");

        let response = reqwest::get(mock.endpoint_url()).await.unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["__type"], "InvalidRequestException");
        assert_eq!(body["message"], "Bad thing name");
    }

    #[tokio::test]
    async fn test_missing_fixture_queues_nothing() {
        let mock = MockHttp::start().await.unwrap();
        let result = mock.add_response_with_body("does/not/exist.json");

        assert!(result.is_err());
        assert_eq!(mock.pending_responses(), 0);
    }

    #[tokio::test]
    async fn test_sdk_config_points_at_server() {
        let mock = MockHttp::start().await.unwrap();
        let config = mock.sdk_config().await;

        assert_eq!(config.endpoint_url(), Some(mock.endpoint_url().as_str()));
        assert_eq!(config.region().map(|r| r.as_ref()), Some(MOCK_REGION));
    }

    #[test]
    fn test_query_param_lookup() {
        let request = RecordedRequest {
            method: "GET".to_string(),
            path: "/endpoint".to_string(),
            query: Some("endpointType=iot%3AData-ATS&flag".to_string()),
            headers: HashMap::new(),
            body: Vec::new(),
        };

        assert_eq!(request.query_param("endpointType"), Some("iot%3AData-ATS"));
        assert_eq!(request.query_param("flag"), Some(""));
        assert_eq!(request.query_param("missing"), None);
    }
}
