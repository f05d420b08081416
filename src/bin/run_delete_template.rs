//! Delete an SES email template.
//!
//! Usage: `run_delete_template <template_name>`
//!
//! Prerequisites: An existing SES template.

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::ses;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Delete an SES email template
#[derive(Debug, Parser)]
#[command(name = "run_delete_template", version)]
struct Args {
    /// Name of the template
    template_name: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    ses::delete_template(&args.template_name, runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
