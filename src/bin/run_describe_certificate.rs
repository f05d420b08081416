//! Describe an ACM certificate.
//!
//! Usage: `run_describe_certificate <certificate_arn>`
//!
//! Prerequisites: A certificate.

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::acm;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Describe an ACM certificate
#[derive(Debug, Parser)]
#[command(name = "run_describe_certificate", version)]
struct Args {
    /// ARN of the certificate
    certificate_arn: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    acm::describe_certificate(&args.certificate_arn, runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
