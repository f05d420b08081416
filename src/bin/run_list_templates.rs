//! List SES email templates.
//!
//! Usage: `run_list_templates`

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::ses;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// List SES email templates
#[derive(Debug, Parser)]
#[command(name = "run_list_templates", version)]
struct Args;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    if let Err(status) = parse_args::<Args>() {
        return Ok(ExitCode::from(status));
    }

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    ses::list_templates(runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
