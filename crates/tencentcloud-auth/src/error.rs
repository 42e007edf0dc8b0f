//! Error types for request signing and verification.

/// Errors that can occur while signing or verifying a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is missing from the request.
    #[error("Missing Authorization header")]
    MissingAuthHeader,

    /// The `Authorization` header could not be parsed.
    #[error("Invalid Authorization header format")]
    InvalidAuthHeader,

    /// The signing algorithm is not supported.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A header referenced by the signature is missing.
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// A parameter required by the legacy signature is missing.
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// The `Credential` component is not `SecretId/date/service/tc3_request`.
    #[error("Invalid credential format")]
    InvalidCredential,

    /// The timestamp is not a valid Unix time in seconds, or does not match
    /// the credential scope date.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The secret id was not found in the secret store.
    #[error("Secret id not found: {0}")]
    SecretIdNotFound(String),

    /// The computed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,
}
