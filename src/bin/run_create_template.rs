//! Create an SES email template.
//!
//! Usage: `run_create_template <template_name> <subject> <text_body>`

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::ses;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Create an SES email template
#[derive(Debug, Parser)]
#[command(name = "run_create_template", version)]
struct Args {
    /// Name of the template
    template_name: String,
    /// Subject line
    subject: String,
    /// Plain-text body
    text_body: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    let content = ses::TemplateContent {
        subject: &args.subject,
        text: &args.text_body,
        html: None,
    };
    ses::create_template(&args.template_name, content, runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
