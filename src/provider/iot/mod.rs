//! # AWS IoT
//!
//! Examples for managing IoT things and discovering the account's endpoint.

mod endpoint;
mod things;

use aws_config::SdkConfig;
use aws_sdk_iot::Client as IotClient;

pub use endpoint::{describe_endpoint, send_describe_endpoint};
pub use things::{
    create_thing, delete_thing, list_things, send_create_thing, send_delete_thing,
    send_list_things,
};

/// Build an IoT client from the shared SDK configuration
pub fn client(sdk_config: &SdkConfig) -> IotClient {
    IotClient::new(sdk_config)
}
