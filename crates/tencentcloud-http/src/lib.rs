//! Transport core for Tencent Cloud API clients.
//!
//! [`ApiClient::invoke`] is the single entry point every typed operation goes
//! through:
//!
//! 1. serialize the request model,
//! 2. build and sign the HTTP request for the configured signature method,
//! 3. hand it to an [`HttpTransport`] (the only suspension point),
//! 4. decode the response envelope into either an `ApiError` or the typed
//!    response model.
//!
//! Nothing is retried or cached. The client holds no mutable state, so one
//! instance can serve any number of concurrent calls.

mod client;
mod request;
mod transport;

pub use client::ApiClient;
pub use request::{REQUEST_CLIENT, RequestContext, build_request};
pub use transport::{HttpTransport, ReqwestTransport, TransportFuture};
