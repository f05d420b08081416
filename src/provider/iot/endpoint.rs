//! # IoT Endpoint Discovery

use std::io::Write;

use aws_config::SdkConfig;
use aws_sdk_iot::operation::describe_endpoint::DescribeEndpointOutput;
use aws_sdk_iot::Client as IotClient;
use tracing::{debug, warn};

use crate::console::Console;
use crate::constants::DEFAULT_IOT_ENDPOINT_TYPE;
use crate::error::{ExampleError, Result};

const DESCRIBE_ENDPOINT: &str = "DescribeEndpoint";

/// Send `DescribeEndpoint` for the given endpoint type
///
/// # Errors
///
/// Returns the service error reported by IoT.
pub async fn send_describe_endpoint(
    client: &IotClient,
    endpoint_type: &str,
) -> Result<DescribeEndpointOutput> {
    debug!("Calling {} with endpoint type {}", DESCRIBE_ENDPOINT, endpoint_type);

    client
        .describe_endpoint()
        .endpoint_type(endpoint_type)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(DESCRIBE_ENDPOINT, e.into_service_error()))
}

/// Describe the account's IoT endpoint.
///
/// `endpoint_type` defaults to `iot:Data-ATS`. Returns the endpoint address on
/// success, `None` on failure; either way one line is printed.
///
/// `Some` only means the call succeeded. A successful response without an
/// `endpointAddress` yields `Some("")` and prints `Your IoT endpoint is ''.`.
pub async fn describe_endpoint<O: Write, E: Write>(
    endpoint_type: Option<&str>,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> Option<String> {
    let endpoint_type = endpoint_type.unwrap_or(DEFAULT_IOT_ENDPOINT_TYPE);
    let client = super::client(sdk_config);
    let outcome = send_describe_endpoint(&client, endpoint_type).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", DESCRIBE_ENDPOINT, e);
    }

    console.report(
        &outcome,
        |c, output| {
            c.out_line(&format!(
                "Your IoT endpoint is '{}'.",
                output.endpoint_address().unwrap_or_default()
            ));
        },
        |e| format!("Error calling DescribeEndpoint: {}", e.message()),
    );

    outcome
        .ok()
        .map(|output| output.endpoint_address().unwrap_or_default().to_string())
}
