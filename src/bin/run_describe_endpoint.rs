//! Describe the account's IoT endpoint.
//!
//! Usage: `run_describe_endpoint [endpoint_type]`

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::iot;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Describe the account's IoT endpoint
#[derive(Debug, Parser)]
#[command(name = "run_describe_endpoint", version)]
struct Args {
    /// Endpoint type, e.g. iot:Data-ATS or iot:CredentialProvider (default: iot:Data-ATS)
    endpoint_type: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    iot::describe_endpoint(args.endpoint_type.as_deref(), runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
