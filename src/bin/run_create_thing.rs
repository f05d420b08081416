//! Create an IoT thing.
//!
//! Usage: `run_create_thing <thing_name>`

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::iot;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Create an IoT thing
#[derive(Debug, Parser)]
#[command(name = "run_create_thing", version)]
struct Args {
    /// Name of the thing to create
    thing_name: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(status) => return Ok(ExitCode::from(status)),
    };

    let runtime = initialize(&ClientConfig::from_env()).await?;
    let mut console = Console::stdio();

    iot::create_thing(&args.thing_name, runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
