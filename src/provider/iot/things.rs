//! # IoT Things
//!
//! Create, delete and list things in the IoT registry.

use std::io::Write;

use aws_config::SdkConfig;
use aws_sdk_iot::operation::create_thing::CreateThingOutput;
use aws_sdk_iot::operation::delete_thing::DeleteThingOutput;
use aws_sdk_iot::operation::list_things::ListThingsOutput;
use aws_sdk_iot::Client as IotClient;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::{ExampleError, Result};

const CREATE_THING: &str = "CreateThing";
const DELETE_THING: &str = "DeleteThing";
const LIST_THINGS: &str = "ListThings";

/// Send `CreateThing`
///
/// # Errors
///
/// Returns the service error reported by IoT.
pub async fn send_create_thing(client: &IotClient, thing_name: &str) -> Result<CreateThingOutput> {
    debug!("Calling {} for thing {}", CREATE_THING, thing_name);

    client
        .create_thing()
        .thing_name(thing_name)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(CREATE_THING, e.into_service_error()))
}

/// Create an IoT thing.
///
/// Prints one line and returns `true` if IoT reported success.
pub async fn create_thing<O: Write, E: Write>(
    thing_name: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_create_thing(&client, thing_name).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", CREATE_THING, e);
    }

    console.report(
        &outcome,
        |c, _| c.out_line(&format!("Successfully created thing '{thing_name}'.")),
        |e| format!("Error calling CreateThing: {}", e.message()),
    )
}

/// Send `DeleteThing`
///
/// # Errors
///
/// Returns the service error reported by IoT.
pub async fn send_delete_thing(client: &IotClient, thing_name: &str) -> Result<DeleteThingOutput> {
    debug!("Calling {} for thing {}", DELETE_THING, thing_name);

    client
        .delete_thing()
        .thing_name(thing_name)
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(DELETE_THING, e.into_service_error()))
}

/// Delete an IoT thing.
pub async fn delete_thing<O: Write, E: Write>(
    thing_name: &str,
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_delete_thing(&client, thing_name).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", DELETE_THING, e);
    }

    console.report(
        &outcome,
        |c, _| c.out_line(&format!("Successfully deleted thing '{thing_name}'.")),
        |e| format!("Error calling DeleteThing: {}", e.message()),
    )
}

/// Send `ListThings` for the first page of results
///
/// # Errors
///
/// Returns the service error reported by IoT.
pub async fn send_list_things(client: &IotClient) -> Result<ListThingsOutput> {
    debug!("Calling {}", LIST_THINGS);

    client
        .list_things()
        .send()
        .await
        .map_err(|e| ExampleError::from_sdk(LIST_THINGS, e.into_service_error()))
}

/// List the things in the registry, one line per thing.
pub async fn list_things<O: Write, E: Write>(
    sdk_config: &SdkConfig,
    console: &mut Console<O, E>,
) -> bool {
    let client = super::client(sdk_config);
    let outcome = send_list_things(&client).await;
    if let Err(e) = &outcome {
        warn!("{} failed: {}", LIST_THINGS, e);
    }

    console.report(
        &outcome,
        |c, output| {
            let things = output.things();
            c.out_line(&format!("Found {} thing(s).", things.len()));
            for thing in things {
                c.out_line(&format!(
                    "  {} ({})",
                    thing.thing_name().unwrap_or("<unnamed>"),
                    thing.thing_arn().unwrap_or("<no arn>")
                ));
            }
        },
        |e| format!("Error calling ListThings: {}", e.message()),
    )
}
