//! The network exchange behind every call.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use tencentcloud_core::{HttpProfile, TransportError, TransportErrorKind};

/// Future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<http::Response<Bytes>, TransportError>> + Send + 'a>>;

/// Performs one HTTP exchange.
///
/// Implementations return any HTTP response, whatever its status, as `Ok`.
/// `Err` is reserved for failures where no response was obtained.
pub trait HttpTransport: Send + Sync + 'static {
    /// Send a fully built, signed request.
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_>;
}

/// [`HttpTransport`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Build a transport honoring the profile's timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created.
    pub fn new(profile: &HttpProfile) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(profile.timeout)
            .build()
            .map_err(classify)?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_> {
        Box::pin(async move {
            let request = reqwest::Request::try_from(request).map_err(classify)?;
            let response = self.client.execute(request).await.map_err(classify)?;

            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await.map_err(classify)?;

            let mut out = http::Response::new(body);
            *out.status_mut() = status;
            *out.headers_mut() = headers;
            Ok(out)
        })
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_body() || err.is_decode() || err.is_request() {
        TransportErrorKind::Io
    } else {
        TransportErrorKind::Other
    };
    TransportError::new(kind, err.to_string()).with_source(err)
}
