//! Wire codec for Tencent Cloud API models.
//!
//! Three pieces sit between typed models and the network:
//!
//! - [`flatten`] turns a request model into an ordered list of
//!   `(dotted.key, value)` pairs (`Filters.0.Name`, `Filters.0.Values.1`),
//!   used by every query string and form body. A TC3 `POST` body is instead
//!   the model's plain JSON serialization, which is what the service accepts
//!   on that path; both come from the same `Serialize` impl.
//! - [`unflatten`] populates a response model from a decoded JSON payload,
//!   coercing loosely typed scalars and reporting the key path of any value
//!   that does not fit.
//! - [`decode_envelope`] and [`decode_response`] take a raw response body
//!   apart into its `Response.Error` or payload halves.
//!
//! # Flattening rules
//!
//! - Nested object fields are written as `Prefix.Field`, array elements as
//!   `Prefix.N` (zero-based).
//! - Unset optional fields, unit values and empty arrays write nothing.
//! - Booleans are `true`/`false`; byte buffers are standard base64.

pub mod envelope;
pub mod error;
pub mod flatten;
pub mod unflatten;

pub use envelope::{EnvelopeError, ResponseEnvelope, decode_envelope, decode_response};
pub use error::FlattenError;
pub use flatten::{Params, flatten};
pub use tencentcloud_core::DecodeError;
pub use unflatten::{FromWire, Object, Unflatten, params_to_value, unflatten, unflatten_object};
