//! TMT (Tencent Machine Translation, API `2018-03-21`) model types.
//!
//! Requests serialize with `serde`; responses implement
//! [`tencentcloud_codec::Unflatten`] so they can be read out of a response
//! envelope with key-path error reporting.
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;

pub use operations::TmtOperation;

use tencentcloud_core::ServiceDescriptor;

/// Service name, also the endpoint prefix.
pub const SERVICE: &str = "tmt";

/// API version every operation of this crate belongs to.
pub const API_VERSION: &str = "2018-03-21";

/// Descriptor used to build TMT clients.
pub const DESCRIPTOR: ServiceDescriptor = ServiceDescriptor::new(SERVICE, API_VERSION);
