//! # Amazon Simple Email Service
//!
//! Email template examples against the SES v2 API.

mod templates;

use aws_config::SdkConfig;
use aws_sdk_sesv2::Client as SesClient;

pub use templates::{
    create_template, delete_template, get_template, list_templates, send_create_template,
    send_delete_template, send_get_template, send_list_templates, TemplateContent,
};

/// Build an SES client from the shared SDK configuration
pub fn client(sdk_config: &SdkConfig) -> SesClient {
    SesClient::new(sdk_config)
}
