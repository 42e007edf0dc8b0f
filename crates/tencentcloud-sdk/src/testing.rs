//! In-memory transport for client tests.

use std::collections::VecDeque;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tencentcloud_core::{ClientProfile, Credential, CredentialProvider, StaticCredentialProvider};
use tencentcloud_http::{HttpTransport, TransportFuture};

/// Replies with queued bodies and records every request.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<http::Request<Bytes>>>,
}

impl RecordingTransport {
    pub(crate) fn replying(bodies: &[&str]) -> Arc<Self> {
        let transport = Self::default();
        transport
            .replies
            .lock()
            .extend(bodies.iter().map(|b| (*b).to_owned()));
        Arc::new(transport)
    }

    pub(crate) fn take_requests(&self) -> Vec<http::Request<Bytes>> {
        std::mem::take(&mut *self.requests.lock())
    }
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_> {
        self.requests.lock().push(request);
        let body = self.replies.lock().pop_front().expect("no reply queued");
        Box::pin(async move { Ok(http::Response::new(Bytes::from(body))) })
    }
}

pub(crate) fn credentials() -> Arc<dyn CredentialProvider> {
    Arc::new(StaticCredentialProvider::new(Credential::new(
        "AKIDEXAMPLE",
        "secret",
    )))
}

pub(crate) fn profile() -> ClientProfile {
    ClientProfile::default()
}

pub(crate) fn header<'a>(request: &'a http::Request<Bytes>, name: &str) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
