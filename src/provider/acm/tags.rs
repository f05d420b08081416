//! # Certificate Tags
//!
//! Add, remove and list the tags on an ACM certificate.

use std::io::Write;

use aws_config::SdkConfig;
use aws_sdk_acm::operation::add_tags_to_certificate::AddTagsToCertificateOutput;
use aws_sdk_acm::operation::list_tags_for_certificate::ListTagsForCertificateOutput;
use aws_sdk_acm::operation::remove_tags_from_certificate::RemoveTagsFromCertificateOutput;
use aws_sdk_acm::types::Tag;
use aws_sdk_acm::Client as AcmClient;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::{ExampleError, Result};

const REMOVE_TAGS: &str = "RemoveTagsFromCertificate";
const ADD_TAGS: &str = "AddTagsToCertificate";
const LIST_TAGS: &str = "ListTagsForCertificate";

/// Send `RemoveTagsFromCertificate` with a single tag identified by key
///
/// # Errors
///
/// Returns the service error reported by ACM.
pub async fn send_remove_tag(
    client: &AcmClient,
    certificate_arn: &str,
    tag_key: &str,
) -> Result<RemoveTagsFromCertificateOutput> {
    let tag = Tag::builder()
        .key(tag_key)
        .build()
        .map_err(|e| ExampleError::invalid_request(REMOVE_TAGS, e))?;

    debug!(
        "Calling {} for certificate {} with tag key {}",
        REMOVE_TAGS, certificate_arn, tag_key
    );

    client
        .remove_tags_from_certificate()
        .certificate_arn(certificate_arn)
        .tags(tag)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(REMOVE_TAGS, e.into_service_error()))
}

/// Remove a tag from an ACM certificate.
///
/// Prints one line and returns `true` if ACM reported success.
pub async fn remove_tag_from_certificate<O: Write, E: Write>(
    certificate_arn: &str,
    tag_key: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_remove_tag(&client, certificate_arn, tag_key).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", REMOVE_TAGS, e);
    }

    console.report(
        &outcome,
        |c, _| {
            c.out_line(&format!(
                "Success: Tag with key '{tag_key}' removed from certificate with ARN '{certificate_arn}'."
            ));
        },
        |e| format!("Error: RemoveTagFromCertificate: {}", e.message()),
    )
}

/// Send `AddTagsToCertificate` with a single key/value tag
///
/// # Errors
///
/// Returns the service error reported by ACM.
pub async fn send_add_tag(
    client: &AcmClient,
    certificate_arn: &str,
    tag_key: &str,
    tag_value: &str,
) -> Result<AddTagsToCertificateOutput> {
    let tag = Tag::builder()
        .key(tag_key)
        .value(tag_value)
        .build()
        .map_err(|e| ExampleError::invalid_request(ADD_TAGS, e))?;

    debug!(
        "Calling {} for certificate {} with tag {}={}",
        ADD_TAGS, certificate_arn, tag_key, tag_value
    );

    client
        .add_tags_to_certificate()
        .certificate_arn(certificate_arn)
        .tags(tag)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(ADD_TAGS, e.into_service_error()))
}

/// Add a key/value tag to an ACM certificate.
pub async fn add_tag_to_certificate<O: Write, E: Write>(
    certificate_arn: &str,
    tag_key: &str,
    tag_value: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_add_tag(&client, certificate_arn, tag_key, tag_value).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", ADD_TAGS, e);
    }

    console.report(
        &outcome,
        |c, _| {
            c.out_line(&format!(
                "Success: Tag with key '{tag_key}' added to certificate with ARN '{certificate_arn}'."
            ));
        },
        |e| format!("Error: AddTagsToCertificate: {}", e.message()),
    )
}

/// Send `ListTagsForCertificate`
///
/// # Errors
///
/// Returns the service error reported by ACM.
pub async fn send_list_tags(
    client: &AcmClient,
    certificate_arn: &str,
) -> Result<ListTagsForCertificateOutput> {
    debug!("Calling {} for certificate {}", LIST_TAGS, certificate_arn);

    client
        .list_tags_for_certificate()
        .certificate_arn(certificate_arn)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(LIST_TAGS, e.into_service_error()))
}

/// List the tags on an ACM certificate, one `key: value` line per tag.
pub async fn list_tags_for_certificate<O: Write, E: Write>(
    certificate_arn: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_list_tags(&client, certificate_arn).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", LIST_TAGS, e);
    }

    console.report(
        &outcome,
        |c, output| {
            let tags = output.tags();
            c.out_line(&format!(
                "Certificate with ARN '{certificate_arn}' has {} tag(s).",
                tags.len()
            ));
            for tag in tags {
                c.out_line(&format!("  {}: {}", tag.key(), tag.value().unwrap_or("")));
            }
        },
        |e| format!("Error: ListTagsForCertificate: {}", e.message()),
    )
}
