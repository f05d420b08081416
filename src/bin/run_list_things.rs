//! List the things in the IoT registry.
//!
//! Usage: `run_list_things`

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::iot;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// List the things in the IoT registry
#[derive(Debug, Parser)]
#[command(name = "run_list_things", version)]
struct Args;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    if let Err(status) = parse_args::<Args>() {
        return Ok(ExitCode::from(status));
    }

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    iot::list_things(runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
