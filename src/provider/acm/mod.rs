//! # AWS Certificate Manager
//!
//! Examples for tagging and inspecting ACM certificates.
//!
//! Each example comes in two layers:
//! - a request function taking an ACM client and returning the SDK output
//! - an example function taking the shared `SdkConfig` and a `Console`, which
//!   prints one outcome line and returns the success flag

mod certificates;
mod tags;

use aws_config::SdkConfig;
use aws_sdk_acm::Client as AcmClient;

pub use certificates::{describe_certificate, send_describe_certificate};
pub use tags::{
    add_tag_to_certificate, list_tags_for_certificate, remove_tag_from_certificate,
    send_add_tag, send_list_tags, send_remove_tag,
};

/// Build an ACM client from the shared SDK configuration
pub fn client(sdk_config: &SdkConfig) -> AcmClient {
    AcmClient::new(sdk_config)
}
