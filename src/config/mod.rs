//! # Client Configuration
//!
//! Example-level configuration loaded from environment variables.
//!
//! All settings are optional. Anything left unset falls through to the AWS SDK's
//! own resolution (profile files, `AWS_REGION`, the default credential chain).

mod client;

pub use client::ClientConfig;
