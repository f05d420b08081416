//! # Initialization
//!
//! Brackets every example: rustls setup, tracing, and AWS SDK configuration on
//! the way in, and an explicit shutdown on the way out.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{ExampleError, Result};
use crate::observability;

/// Everything an example needs once the SDK is initialized
#[derive(Debug)]
pub struct ExampleRuntime {
    sdk_config: SdkConfig,
}

impl ExampleRuntime {
    /// Wrap an already loaded SDK configuration
    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    /// Shared SDK configuration used to build service clients
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// Region the examples will call into
    pub fn region(&self) -> Option<&str> {
        self.sdk_config.region().map(|region| region.as_ref())
    }

    /// Tear the runtime down. Clients built from this configuration must not be used afterwards.
    pub fn shutdown(self) {
        info!(
            "Shutting down example runtime (region={})",
            self.region().unwrap_or("<none>")
        );
    }
}

/// Initialize the example runtime
///
/// This function handles:
/// - rustls crypto provider setup
/// - Tracing subscriber setup
/// - AWS SDK configuration (default chain plus `ClientConfig` overrides)
///
/// # Errors
///
/// Returns `ExampleError::Config` when no region can be resolved.
pub async fn initialize(config: &ClientConfig) -> Result<ExampleRuntime> {
    // Required for rustls 0.23+ when no default provider is set via features.
    // A provider installed earlier (by a test, for example) is kept.
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    observability::init_logging(&config.log_filter);

    let sdk_config = load_sdk_config(config).await;
    if sdk_config.region().is_none() {
        return Err(ExampleError::Config(format!(
            "No AWS region configured. Set AWS_REGION, {} or a region in your AWS profile.",
            crate::constants::ENV_REGION
        )));
    }

    let runtime = ExampleRuntime::from_sdk_config(sdk_config);
    info!(
        "Example runtime initialized (region={})",
        runtime.region().unwrap_or("<none>")
    );

    Ok(runtime)
}

/// Load the AWS SDK configuration with the overrides from `config` applied
pub async fn load_sdk_config(config: &ClientConfig) -> SdkConfig {
    let mut builder = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        debug!("Using region override: {}", region);
        builder = builder.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        info!("Routing AWS requests to {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    builder.load().await
}
