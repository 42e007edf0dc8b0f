//! TBaaS (Tencent Blockchain as a Service, API `2018-04-16`) model types.
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use operations::TbaasOperation;

use tencentcloud_core::ServiceDescriptor;

/// Service name, also the endpoint prefix.
pub const SERVICE: &str = "tbaas";

/// API version every operation of this crate belongs to.
pub const API_VERSION: &str = "2018-04-16";

/// Descriptor used to build TBaaS clients.
pub const DESCRIPTOR: ServiceDescriptor = ServiceDescriptor::new(SERVICE, API_VERSION);
