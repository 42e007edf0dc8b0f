//! TC3-HMAC-SHA256 signing and verification.
//!
//! Signing flow:
//!
//! 1. Hash the payload and build the canonical request.
//! 2. Build the string to sign from the timestamp, credential scope and the
//!    canonical request hash.
//! 3. Derive the signing key from the secret key, UTC date and service.
//! 4. Hex-encode `HMAC-SHA256(signing_key, string_to_sign)`.
//!
//! The credential scope is `<YYYY-MM-DD>/<service>/tc3_request`, where the date
//! is the UTC date of the `X-TC-Timestamp` value.

use chrono::DateTime;
use hmac::{Hmac, KeyInit, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{build_canonical_request, build_signed_headers_string};
use crate::credentials::SecretKeyProvider;
use crate::error::AuthError;

/// Algorithm name carried in the `Authorization` header.
pub const ALGORITHM: &str = "TC3-HMAC-SHA256";

/// Terminator of the credential scope.
const SCOPE_TERMINATOR: &str = "tc3_request";

/// Headers signed by the client.
pub const SIGNED_HEADERS: &[&str] = &["content-type", "host"];

type HmacSha256 = Hmac<Sha256>;

/// Inputs of one TC3 signature.
#[derive(Debug, Clone, Copy)]
pub struct Tc3Request<'a> {
    /// Secret id placed in the credential.
    pub secret_id: &'a str,
    /// Secret key the signing key is derived from.
    pub secret_key: &'a str,
    /// Service name, e.g. `iai`.
    pub service: &'a str,
    /// Value of the `Host` header.
    pub host: &'a str,
    /// HTTP method.
    pub method: &'a str,
    /// Query string as sent, without the leading `?`.
    pub query: &'a str,
    /// Value of the `Content-Type` header.
    pub content_type: &'a str,
    /// Request body bytes.
    pub payload: &'a [u8],
    /// Unix timestamp in seconds, as sent in `X-TC-Timestamp`.
    pub timestamp: i64,
}

/// The result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The secret id that signed the request.
    pub secret_id: String,
    /// The service the signature was scoped to.
    pub service: String,
    /// The UTC date of the signature.
    pub date: String,
    /// Headers covered by the signature (empty for legacy signatures).
    pub signed_headers: Vec<String>,
}

/// Parsed components of a TC3 `Authorization` header.
///
/// Format:
/// ```text
/// TC3-HMAC-SHA256 Credential=AKID/2019-02-25/cvm/tc3_request,
///   SignedHeaders=content-type;host,
///   Signature=<hex-signature>
/// ```
#[derive(Debug, Clone)]
pub struct ParsedAuth {
    /// The secret id.
    pub secret_id: String,
    /// The date component of the credential scope (YYYY-MM-DD).
    pub date: String,
    /// The service component of the credential scope.
    pub service: String,
    /// Signed header names (lowercase).
    pub signed_headers: Vec<String>,
    /// The hex-encoded signature.
    pub signature: String,
}

/// Hash a payload with SHA-256 and return the lowercase hex digest.
///
/// # Examples
///
/// ```
/// use tencentcloud_auth::hash_payload;
///
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// UTC date (`YYYY-MM-DD`) of a Unix timestamp.
///
/// # Errors
///
/// Returns [`AuthError::InvalidTimestamp`] if the timestamp is out of range.
pub fn utc_date(timestamp: i64) -> Result<String, AuthError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AuthError::InvalidTimestamp(timestamp.to_string()))
}

/// Build the credential scope `<date>/<service>/tc3_request`.
#[must_use]
pub fn credential_scope(date: &str, service: &str) -> String {
    format!("{date}/{service}/{SCOPE_TERMINATOR}")
}

/// Build the TC3 string to sign.
///
/// ```text
/// TC3-HMAC-SHA256\n
/// <timestamp>\n
/// <credential_scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
#[must_use]
pub fn build_string_to_sign(timestamp: i64, scope: &str, canonical_request_hash: &str) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{scope}\n{canonical_request_hash}")
}

/// Derive the signing key.
///
/// ```text
/// SecretDate    = HMAC-SHA256("TC3" + secret_key, date)
/// SecretService = HMAC-SHA256(SecretDate, service)
/// SecretSigning = HMAC-SHA256(SecretService, "tc3_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, service: &str) -> Vec<u8> {
    let date_key = hmac_sha256(format!("TC3{secret_key}").as_bytes(), date.as_bytes());
    let service_key = hmac_sha256(&date_key, service.as_bytes());
    hmac_sha256(&service_key, SCOPE_TERMINATOR.as_bytes())
}

/// Compute the hex-encoded HMAC-SHA256 signature of `data`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Sign a request and return the `Authorization` header value.
///
/// The signature covers the `content-type` and `host` headers.
///
/// # Errors
///
/// Returns [`AuthError::InvalidTimestamp`] if the timestamp is out of range.
pub fn sign_tc3(request: &Tc3Request<'_>) -> Result<String, AuthError> {
    let date = utc_date(request.timestamp)?;
    let scope = credential_scope(&date, request.service);

    let canonical_request = build_canonical_request(
        request.method,
        "/",
        request.query,
        &[("content-type", request.content_type), ("host", request.host)],
        SIGNED_HEADERS,
        &hash_payload(request.payload),
    );
    let string_to_sign = build_string_to_sign(
        request.timestamp,
        &scope,
        &hash_payload(canonical_request.as_bytes()),
    );

    let signing_key = derive_signing_key(request.secret_key, &date, request.service);
    let signature = compute_signature(&signing_key, &string_to_sign);

    Ok(format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
        request.secret_id,
        build_signed_headers_string(SIGNED_HEADERS),
    ))
}

/// Parse a TC3 `Authorization` header value into its components.
///
/// # Errors
///
/// Returns [`AuthError::InvalidAuthHeader`] if the header format is invalid,
/// [`AuthError::UnsupportedAlgorithm`] if the algorithm is not
/// `TC3-HMAC-SHA256`, or [`AuthError::InvalidCredential`] if the credential
/// scope is malformed.
pub fn parse_authorization_header(header: &str) -> Result<ParsedAuth, AuthError> {
    let (algorithm, rest) = header.split_once(' ').ok_or(AuthError::InvalidAuthHeader)?;

    if algorithm != ALGORITHM {
        return Err(AuthError::UnsupportedAlgorithm(algorithm.to_owned()));
    }

    let mut credential = None;
    let mut signed_headers = None;
    let mut signature = None;

    for part in rest.split(',') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix("Credential=") {
            credential = Some(value);
        } else if let Some(value) = part.strip_prefix("SignedHeaders=") {
            signed_headers = Some(value);
        } else if let Some(value) = part.strip_prefix("Signature=") {
            signature = Some(value);
        }
    }

    let credential = credential.ok_or(AuthError::InvalidAuthHeader)?;
    let signed_headers = signed_headers.ok_or(AuthError::InvalidAuthHeader)?;
    let signature = signature.ok_or(AuthError::InvalidAuthHeader)?;

    // SecretId/date/service/tc3_request
    let cred_parts: Vec<&str> = credential.splitn(4, '/').collect();
    if cred_parts.len() != 4 || cred_parts[3] != SCOPE_TERMINATOR || cred_parts[0].is_empty() {
        return Err(AuthError::InvalidCredential);
    }

    Ok(ParsedAuth {
        secret_id: cred_parts[0].to_owned(),
        date: cred_parts[1].to_owned(),
        service: cred_parts[2].to_owned(),
        signed_headers: signed_headers.split(';').map(ToOwned::to_owned).collect(),
        signature: signature.to_owned(),
    })
}

/// Verify a TC3-signed HTTP request.
///
/// # Errors
///
/// Returns an [`AuthError`] if:
/// - The `Authorization` header is missing or malformed
/// - `X-TC-Timestamp` is missing, invalid, or disagrees with the scope date
/// - The secret id is unknown
/// - A signed header is missing
/// - The signature does not match
pub fn verify_tc3(
    parts: &http::request::Parts,
    body: &[u8],
    provider: &dyn SecretKeyProvider,
) -> Result<AuthResult, AuthError> {
    let auth_header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let parsed = parse_authorization_header(auth_header)?;

    let raw_timestamp = header_value(parts, "x-tc-timestamp")?;
    let timestamp: i64 = raw_timestamp
        .parse()
        .map_err(|_| AuthError::InvalidTimestamp(raw_timestamp.to_owned()))?;
    if utc_date(timestamp)? != parsed.date {
        return Err(AuthError::InvalidTimestamp(raw_timestamp.to_owned()));
    }

    let secret_key = provider.get_secret_key(&parsed.secret_id)?;

    debug!(
        secret_id = %parsed.secret_id,
        date = %parsed.date,
        service = %parsed.service,
        "Verifying TC3 signature"
    );

    let signed_header_refs: Vec<&str> = parsed.signed_headers.iter().map(String::as_str).collect();
    let mut header_pairs = Vec::with_capacity(signed_header_refs.len());
    for name in &signed_header_refs {
        header_pairs.push((*name, header_value(parts, name)?));
    }

    let canonical_request = build_canonical_request(
        parts.method.as_str(),
        parts.uri.path(),
        parts.uri.query().unwrap_or(""),
        &header_pairs,
        &signed_header_refs,
        &hash_payload(body),
    );

    debug!(canonical_request, "Built canonical request");

    let scope = credential_scope(&parsed.date, &parsed.service);
    let string_to_sign = build_string_to_sign(
        timestamp,
        &scope,
        &hash_payload(canonical_request.as_bytes()),
    );
    let signing_key = derive_signing_key(&secret_key, &parsed.date, &parsed.service);
    let expected = compute_signature(&signing_key, &string_to_sign);

    if expected.as_bytes().ct_eq(parsed.signature.as_bytes()).into() {
        debug!(secret_id = %parsed.secret_id, "TC3 verification succeeded");
        Ok(AuthResult {
            secret_id: parsed.secret_id,
            service: parsed.service,
            date: parsed.date,
            signed_headers: parsed.signed_headers,
        })
    } else {
        debug!(
            expected = %expected,
            provided = %parsed.signature,
            "TC3 signature mismatch"
        );
        Err(AuthError::SignatureDoesNotMatch)
    }
}

fn header_value<'a>(parts: &'a http::request::Parts, name: &str) -> Result<&'a str, AuthError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader(name.to_owned()))
}

/// Compute HMAC-SHA256.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
