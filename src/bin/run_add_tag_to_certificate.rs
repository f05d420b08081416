//! Add a key/value tag to an ACM certificate.
//!
//! Usage: `run_add_tag_to_certificate <certificate_arn> <tag_key> <tag_value>`
//!
//! Prerequisites: A certificate.

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::acm;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Add a key/value tag to an ACM certificate
#[derive(Debug, Parser)]
#[command(name = "run_add_tag_to_certificate", version)]
struct Args {
    /// ARN of the certificate
    certificate_arn: String,
    /// Key of the tag to add
    tag_key: String,
    /// Value of the tag
    tag_value: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    acm::add_tag_to_certificate(
        &args.certificate_arn,
        &args.tag_key,
        &args.tag_value,
        runtime.sdk_config(),
        &mut console,
    )
    .await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
