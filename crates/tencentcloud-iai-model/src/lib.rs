//! IAI (face recognition, API `2018-03-01`) model types.
//!
//! The service manages face libraries ("groups") holding persons, each with
//! up to five face images, and runs detection, comparison and search against
//! them.
//!
//! - [`input`]: one request struct per operation, serialized with `serde`.
//! - [`output`]: one response struct per operation, decoded through
//!   [`tencentcloud_codec::Unflatten`].
//! - [`types`]: nested records shared by both directions.
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use operations::IaiOperation;

use tencentcloud_core::ServiceDescriptor;

/// Service name, also the endpoint prefix.
pub const SERVICE: &str = "iai";

/// API version every operation of this crate belongs to.
pub const API_VERSION: &str = "2018-03-01";

/// Descriptor used to build IAI clients.
pub const DESCRIPTOR: ServiceDescriptor = ServiceDescriptor::new(SERVICE, API_VERSION);
