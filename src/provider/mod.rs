//! # AWS Service Examples
//!
//! One module per service. Each example function builds a client from the
//! shared `SdkConfig`, sends one request, prints the outcome and returns
//! whether the call succeeded.
//!
//! - `acm`: AWS Certificate Manager
//! - `iot`: AWS IoT Core
//! - `ses`: Amazon Simple Email Service (v2 API)

pub mod acm;
pub mod iot;
pub mod ses;
