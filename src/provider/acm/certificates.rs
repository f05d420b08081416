//! # Certificate Details

use std::io::Write;

use aws_config::SdkConfig;
use aws_sdk_acm::operation::describe_certificate::DescribeCertificateOutput;
use aws_sdk_acm::Client as AcmClient;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::{ExampleError, Result};

const DESCRIBE_CERTIFICATE: &str = "DescribeCertificate";

/// Send `DescribeCertificate`
///
/// # Errors
///
/// Returns the service error reported by ACM.
pub async fn send_describe_certificate(
    client: &AcmClient,
    certificate_arn: &str,
) -> Result<DescribeCertificateOutput> {
    debug!(
        "Calling {} for certificate {}",
        DESCRIBE_CERTIFICATE, certificate_arn
    );

    client
        .describe_certificate()
        .certificate_arn(certificate_arn)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(DESCRIBE_CERTIFICATE, e.into_service_error()))
}

/// Describe an ACM certificate: its domain name and status.
pub async fn describe_certificate<O: Write, E: Write>(
    certificate_arn: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_describe_certificate(&client, certificate_arn).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", DESCRIBE_CERTIFICATE, e);
    }

    console.report(
        &outcome,
        |c, output| {
            let detail = output.certificate();
            let domain = detail.and_then(|d| d.domain_name()).unwrap_or("<unknown>");
            let status = detail
                .and_then(|d| d.status())
                .map_or("<unknown>", |s| s.as_str());
            c.out_line(&format!(
                "Certificate '{certificate_arn}': domain '{domain}', status '{status}'."
            ));
        },
        |e| format!("Error: DescribeCertificate: {}", e.message()),
    )
}
