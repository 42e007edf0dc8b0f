//! Error types for Tencent Cloud API invocations.
//!
//! Every call surfaces exactly one of three remote-facing failure kinds:
//!
//! - [`TransportError`]: no remote response was obtained (connect, timeout, I/O).
//! - [`DecodeError`]: a response arrived but could not be parsed into the
//!   expected shape. Carries the offending key path.
//! - [`ApiError`]: the remote service answered with a structured business error.
//!
//! [`RequestError`] covers local failures that happen before any network
//! exchange is attempted.

use std::fmt;

/// Top-level error returned by every API invocation.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Network or I/O failure; no remote response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response was received but did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The remote service reported a business error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be built locally (nothing was sent).
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl SdkError {
    /// Whether this is a transport-level failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the response could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether the remote service returned a business error.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The remote error code, if this is an [`ApiError`].
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api(err) => Some(&err.code),
            _ => None,
        }
    }
}

impl From<CredentialError> for SdkError {
    fn from(err: CredentialError) -> Self {
        Self::Request(RequestError::Credential(err))
    }
}

/// Convenience result type for API invocations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Classification of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TransportErrorKind {
    /// The connection could not be established.
    Connect,
    /// The exchange did not complete within the configured timeout.
    Timeout,
    /// Reading or writing the request/response failed mid-flight.
    Io,
    /// Any other transport failure.
    Other,
}

impl TransportErrorKind {
    /// Returns a short lowercase name for the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Io => "io",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network or I/O failure: no remote response was obtained.
#[derive(Debug, thiserror::Error)]
#[error("transport error ({kind}): {message}")]
pub struct TransportError {
    /// What went wrong.
    pub kind: TransportErrorKind,
    /// Human-readable description.
    pub message: String,
    /// The underlying error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Create a new transport error without an underlying source.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Set the underlying source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// A response that could not be parsed into the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode `{path}`: {message}")]
pub struct DecodeError {
    /// Dotted key path of the offending value, e.g. `Response.FaceInfos.0.X`.
    pub path: String,
    /// Description of the underlying parse failure.
    pub message: String,
}

impl DecodeError {
    /// Path used when the body as a whole could not be parsed.
    pub const BODY: &'static str = "<body>";

    /// Create a decode error at the given key path.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a decode error for a body that is not structured data at all.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::new(Self::BODY, message)
    }
}

/// A structured business error reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {message} (RequestId: {request_id})")]
pub struct ApiError {
    /// Remote error code, e.g. `InvalidParameterValue.PersonIdAlreadyExist`.
    pub code: String,
    /// Remote error message.
    pub message: String,
    /// Request identifier assigned by the remote service.
    pub request_id: String,
}

/// Local failures raised before any network exchange.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The credential provider could not supply a credential.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The request model could not be serialized.
    #[error("failed to serialize request: {0}")]
    Serialize(String),

    /// A header value contained characters not allowed in HTTP headers.
    #[error("invalid value for header {name}: {message}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Reason the value was rejected.
        message: String,
    },

    /// The request could not be signed.
    #[error("failed to sign request: {0}")]
    Sign(String),

    /// The endpoint could not be turned into a request URI.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Errors raised by credential providers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// A required credential component is not available.
    #[error("missing credential component: {0}")]
    Missing(String),
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configuration key holds a value that cannot be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// The configuration key (environment variable name).
        key: String,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_api_error_with_request_id() {
        let err = ApiError {
            code: "AuthFailure.SignatureFailure".to_owned(),
            message: "signature mismatch".to_owned(),
            request_id: "r-1".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "[AuthFailure.SignatureFailure] signature mismatch (RequestId: r-1)"
        );
    }

    #[test]
    fn test_should_classify_sdk_errors() {
        let transport: SdkError = TransportError::new(TransportErrorKind::Timeout, "slow").into();
        assert!(transport.is_transport());
        assert!(!transport.is_api());
        assert_eq!(transport.api_code(), None);

        let decode: SdkError = DecodeError::body("not json").into();
        assert!(decode.is_decode());

        let api: SdkError = ApiError {
            code: "LimitExceeded".to_owned(),
            message: "too many".to_owned(),
            request_id: "r-2".to_owned(),
        }
        .into();
        assert!(api.is_api());
        assert_eq!(api.api_code(), Some("LimitExceeded"));
    }

    #[test]
    fn test_should_expose_transport_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::new(TransportErrorKind::Connect, "connect failed").with_source(io);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "transport error (connect): connect failed");
    }

    #[test]
    fn test_should_render_decode_path() {
        let err = DecodeError::new("Response.FaceInfos.0.X", "expected integer");
        assert_eq!(
            err.to_string(),
            "failed to decode `Response.FaceInfos.0.X`: expected integer"
        );
        assert_eq!(DecodeError::body("eof").path, "<body>");
    }

    #[test]
    fn test_should_wrap_credential_error_as_request_error() {
        let err: SdkError = CredentialError::Missing("TENCENTCLOUD_SECRET_ID".to_owned()).into();
        assert!(matches!(
            err,
            SdkError::Request(RequestError::Credential(_))
        ));
    }
}
