//! The generic `invoke` entry point shared by every service client.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use http::StatusCode;
use rand::RngExt;
use serde::Serialize;
use tencentcloud_codec::{Unflatten, decode_envelope, unflatten_object};
use tencentcloud_core::{
    ClientProfile, Credential, CredentialProvider, DecodeError, Region, SdkError,
    ServiceDescriptor,
};
use tracing::{debug, warn};

use crate::request::{RequestContext, build_request};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Immutable per-client context. The credential is resolved once, when the
/// client is built.
struct ClientInner {
    descriptor: ServiceDescriptor,
    region: Region,
    profile: ClientProfile,
    credential: Credential,
    transport: Arc<dyn HttpTransport>,
}

/// Client for one service, shared by all its operations.
///
/// Cloning is cheap; clones share the same context and transport.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("service", &self.inner.descriptor.service)
            .field("version", &self.inner.descriptor.version)
            .field("region", &self.inner.region)
            .field("profile", &self.inner.profile)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Request`] if `credentials` cannot supply a
    /// credential, or [`SdkError::Transport`] if the HTTP client cannot be
    /// created.
    pub fn new(
        descriptor: ServiceDescriptor,
        credentials: Arc<dyn CredentialProvider>,
        region: Region,
        profile: ClientProfile,
    ) -> Result<Self, SdkError> {
        let credential = credentials.credential()?;
        let transport = ReqwestTransport::new(&profile.http)?;
        Ok(Self::from_parts(
            descriptor,
            credential,
            region,
            profile,
            Arc::new(transport),
        ))
    }

    /// Create a client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Request`] if `credentials` cannot supply a
    /// credential.
    pub fn with_transport(
        descriptor: ServiceDescriptor,
        credentials: Arc<dyn CredentialProvider>,
        region: Region,
        profile: ClientProfile,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, SdkError> {
        let credential = credentials.credential()?;
        Ok(Self::from_parts(descriptor, credential, region, profile, transport))
    }

    fn from_parts(
        descriptor: ServiceDescriptor,
        credential: Credential,
        region: Region,
        profile: ClientProfile,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        debug!(
            service = descriptor.service,
            region = %region,
            secret_id = %credential.secret_id,
            "created api client"
        );
        Self {
            inner: Arc::new(ClientInner {
                descriptor,
                region,
                profile,
                credential,
                transport,
            }),
        }
    }

    /// The service this client talks to.
    #[must_use]
    pub fn descriptor(&self) -> ServiceDescriptor {
        self.inner.descriptor
    }

    /// The region calls are scoped to.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.inner.region
    }

    /// The client settings.
    #[must_use]
    pub fn profile(&self) -> &ClientProfile {
        &self.inner.profile
    }

    /// Invoke `action` with `request` and decode the typed response.
    ///
    /// Exactly one HTTP exchange is performed. The operation name is not
    /// checked against any list of known operations.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Request`] if the request cannot be built (nothing is sent)
    /// - [`SdkError::Transport`] if no response was obtained
    /// - [`SdkError::Decode`] if the response does not have the expected shape
    /// - [`SdkError::Api`] if the service reports an error
    pub async fn invoke<Req, Resp>(&self, action: &str, request: &Req) -> Result<Resp, SdkError>
    where
        Req: Serialize + ?Sized,
        Resp: Unflatten,
    {
        let inner = &*self.inner;

        let ctx = RequestContext {
            descriptor: inner.descriptor,
            action,
            region: &inner.region,
            profile: &inner.profile,
            credential: &inner.credential,
            timestamp: Utc::now().timestamp(),
            nonce: nonce(),
        };
        let http_request = build_request(&ctx, request)?;

        debug!(
            service = inner.descriptor.service,
            action,
            region = %inner.region,
            sign_method = %inner.profile.sign_method,
            "dispatching request"
        );

        let response = inner.transport.send(http_request).await?;
        decode(action, response.status(), response.body())
    }
}

fn nonce() -> u32 {
    let mut buf = [0u8; 4];
    rand::rng().fill(&mut buf);
    u32::from_le_bytes(buf)
}

fn decode<Resp: Unflatten>(
    action: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<Resp, SdkError> {
    let envelope = match decode_envelope(body) {
        Ok(envelope) => envelope,
        Err(err) if !status.is_success() => {
            let message = format!("HTTP {status}: {}", err.message);
            return Err(DecodeError::new(err.path, message).into());
        }
        Err(err) => return Err(err.into()),
    };

    debug!(
        action,
        status = status.as_u16(),
        request_id = envelope.request_id.as_deref().unwrap_or_default(),
        "received response"
    );

    let payload = envelope.into_payload().inspect_err(|err| {
        if let SdkError::Api(api) = err {
            warn!(
                action,
                code = %api.code,
                request_id = %api.request_id,
                message = %api.message,
                "remote returned an error"
            );
        }
    })?;

    Ok(unflatten_object(&payload, "Response")?)
}
