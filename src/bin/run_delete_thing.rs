//! Delete an IoT thing.
//!
//! Usage: `run_delete_thing <thing_name>`
//!
//! Prerequisites: An existing thing.

use std::process::ExitCode;

use anyhow::Result;
use aws_doc_examples::provider::iot;
use aws_doc_examples::runtime::{initialize, parse_args};
use aws_doc_examples::{ClientConfig, Console};
use clap::Parser;

/// Delete an IoT thing
#[derive(Debug, Parser)]
#[command(name = "run_delete_thing", version)]
struct Args {
    /// Name of the thing to delete
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

    iot::delete_thing(&args.thing_name, runtime.sdk_config(), &mut console).await;

    runtime.shutdown();
    Ok(ExitCode::SUCCESS)
}
