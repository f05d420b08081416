//! Remove a tag from an ACM certificate.
//!
//! Usage: `run_remove_tag_from_certificate <certificate_arn> <tag_key>`
//!
//! Prerequisites: A certificate.

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::acm;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Remove a tag from an ACM certificate
#[derive(Debug, Parser)]
#[command(name = "run_remove_tag_from_certificate", version)]
struct Args {
    /// ARN of the certificate
    certificate_arn: String,
    /// Key of the tag to remove
    tag_key: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    acm::remove_tag_from_certificate(&args.certificate_arn, &args.tag_key, runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
