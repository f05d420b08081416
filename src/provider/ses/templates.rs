//! # Email Templates
//!
//! Get, create, delete and list SES email templates.

use std::io::Write;

use aws_config::SdkConfig;
use aws_sdk_sesv2::operation::create_email_template::CreateEmailTemplateOutput;
use aws_sdk_sesv2::operation::delete_email_template::DeleteEmailTemplateOutput;
use aws_sdk_sesv2::operation::get_email_template::GetEmailTemplateOutput;
use aws_sdk_sesv2::operation::list_email_templates::ListEmailTemplatesOutput;
use aws_sdk_sesv2::types::EmailTemplateContent;
use aws_sdk_sesv2::Client as SesClient;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::{ExampleError, Result};

const GET_TEMPLATE: &str = "GetEmailTemplate";
const CREATE_TEMPLATE: &str = "CreateEmailTemplate";
const DELETE_TEMPLATE: &str = "DeleteEmailTemplate";
const LIST_TEMPLATES: &str = "ListEmailTemplates";

/// Content of a new template
#[derive(Debug, Clone, Copy)]
pub struct TemplateContent<'a> {
    pub subject: &'a str,
    pub text: &'a str,
    pub html: Option<&'a str>,
}

/// Send `GetEmailTemplate`
///
/// # Errors
///
/// Returns the service error reported by SES.
pub async fn send_get_template(
    client: &SesClient,
    template_name: &str,
) -> Result<GetEmailTemplateOutput> {
    debug!("Calling {} for template {}", GET_TEMPLATE, template_name);

    client
        .get_email_template()
        .template_name(template_name)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(GET_TEMPLATE, e.into_service_error()))
}

/// Get a template's attributes.
///
/// Prints one line and returns `true` if SES reported success.
pub async fn get_template<O: Write, E: Write>(
    template_name: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_get_template(&client, template_name).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", GET_TEMPLATE, e);
    }

    console.report(
        &outcome,
        |c, _| c.out_line("Successfully got template."),
        |e| format!("Error getting template. {}", e.message()),
    )
}

/// Send `CreateEmailTemplate`
///
/// # Errors
///
/// Returns the service error reported by SES.
pub async fn send_create_template(
    client: &SesClient,
    template_name: &str,
    content: TemplateContent<'_>,
) -> Result<CreateEmailTemplateOutput> {
    debug!("Calling {} for template {}", CREATE_TEMPLATE, template_name);

    let template_content = EmailTemplateContent::builder()
        .subject(content.subject)
        .text(content.text)
        .set_html(content.html.map(str::to_string))
        .build();

    client
        .create_email_template()
        .template_name(template_name)
        .template_content(template_content)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(CREATE_TEMPLATE, e.into_service_error()))
}

/// Create an email template.
pub async fn create_template<O: Write, E: Write>(
    template_name: &str,
    content: TemplateContent<'_>,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_create_template(&client, template_name, content).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", CREATE_TEMPLATE, e);
    }

    console.report(
        &outcome,
        |c, _| c.out_line(&format!("Successfully created template '{template_name}'.")),
        |e| format!("Error: CreateEmailTemplate: {}", e.message()),
    )
}

/// Send `DeleteEmailTemplate`
///
/// # Errors
///
/// Returns the service error reported by SES.
pub async fn send_delete_template(
    client: &SesClient,
    template_name: &str,
) -> Result<DeleteEmailTemplateOutput> {
    debug!("Calling {} for template {}", DELETE_TEMPLATE, template_name);

    client
        .delete_email_template()
        .template_name(template_name)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(DELETE_TEMPLATE, e.into_service_error()))
}

/// Delete an email template.
pub async fn delete_template<O: Write, E: Write>(
    template_name: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_delete_template(&client, template_name).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", DELETE_TEMPLATE, e);
    }

    console.report(
        &outcome,
        |c, _| c.out_line(&format!("Successfully deleted template '{template_name}'.")),
        |e| format!("Error: DeleteEmailTemplate: {}", e.message()),
    )
}

/// Send `ListEmailTemplates` for the first page of results
///
/// # Errors
///
/// Returns the service error reported by SES.
pub async fn send_list_templates(client: &SesClient) -> Result<ListEmailTemplatesOutput> {
    debug!("Calling {}", LIST_TEMPLATES);

    client
        .list_email_templates()
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(LIST_TEMPLATES, e.into_service_error()))
}

/// List email templates, one line per template.
pub async fn list_templates<O: Write, E: Write>(
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_list_templates(&client).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", LIST_TEMPLATES, e);
    }

    console.report(
        &outcome,
        |c, output| {
            let templates = output.templates_metadata();
            c.out_line(&format!("Found {} template(s).", templates.len()));
            for template in templates {
                c.out_line(&format!(
                    "  {}",
                    template.template_name().unwrap_or("<unnamed>")
                ));
            }
        },
        |e| format!("Error: ListEmailTemplates: {}", e.message()),
    )
}
