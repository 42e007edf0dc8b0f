//! Legacy HmacSHA1 / HmacSHA256 parameter signatures.
//!
//! The signature covers the request method, host and the full parameter list
//! (common parameters plus the flattened request) sorted by key:
//!
//! ```text
//! StringToSign = HTTPMethod + Host + "/?" + k1=v1&k2=v2&...
//! Signature    = Base64(HMAC(SecretKey, StringToSign))
//! ```
//!
//! Values are used raw (not URL-encoded) in the string to sign. The signature
//! travels as the `Signature` parameter.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tencentcloud_core::SignMethod;
use tracing::debug;

use crate::credentials::SecretKeyProvider;
use crate::error::AuthError;
use crate::tc3::{AuthResult, utc_date};

/// Name of the parameter carrying the signature.
pub const SIGNATURE_PARAM: &str = "Signature";

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Build the legacy string to sign. The `Signature` parameter, if present,
/// is excluded.
///
/// # Examples
///
/// ```
/// use tencentcloud_auth::legacy::build_string_to_sign;
///
/// let params = vec![
///     ("Nonce".to_owned(), "1".to_owned()),
///     ("Action".to_owned(), "TextTranslate".to_owned()),
/// ];
/// assert_eq!(
///     build_string_to_sign("POST", "tmt.tencentcloudapi.com", &params),
///     "POSTtmt.tencentcloudapi.com/?Action=TextTranslate&Nonce=1"
/// );
/// ```
#[must_use]
pub fn build_string_to_sign(method: &str, host: &str, params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params
        .iter()
        .filter(|(k, _)| k != SIGNATURE_PARAM)
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let query: Vec<String> = sorted.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{method}{host}/?{}", query.join("&"))
}

/// Compute `Base64(HMAC(secret_key, string_to_sign))` with the given method.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedAlgorithm`] for `TC3-HMAC-SHA256`, which is
/// not a parameter signature.
pub fn compute_signature(
    sign_method: SignMethod,
    secret_key: &str,
    string_to_sign: &str,
) -> Result<String, AuthError> {
    let digest = match sign_method {
        SignMethod::HmacSha1 => {
            let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
                .expect("HMAC can accept any key length");
            mac.update(string_to_sign.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        SignMethod::HmacSha256 => {
            let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
                .expect("HMAC can accept any key length");
            mac.update(string_to_sign.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        SignMethod::Tc3HmacSha256 => {
            return Err(AuthError::UnsupportedAlgorithm(
                sign_method.as_str().to_owned(),
            ));
        }
    };
    Ok(BASE64.encode(digest))
}

/// Sign a parameter list and return the value of the `Signature` parameter.
///
/// `params` must already contain every common parameter, including
/// `SignatureMethod`.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedAlgorithm`] for `TC3-HMAC-SHA256`.
pub fn sign_legacy(
    sign_method: SignMethod,
    http_method: &str,
    host: &str,
    params: &[(String, String)],
    secret_key: &str,
) -> Result<String, AuthError> {
    let string_to_sign = build_string_to_sign(http_method, host, params);
    compute_signature(sign_method, secret_key, &string_to_sign)
}

/// Verify a legacy-signed parameter list, as decoded from a form body or
/// query string.
///
/// A missing `SignatureMethod` means `HmacSHA1`.
///
/// # Errors
///
/// Returns an [`AuthError`] if a required parameter is missing, the secret id
/// is unknown, or the signature does not match.
pub fn verify_legacy(
    http_method: &str,
    host: &str,
    params: &[(String, String)],
    provider: &dyn SecretKeyProvider,
) -> Result<AuthResult, AuthError> {
    let signature = param(params, SIGNATURE_PARAM)?;
    let secret_id = param(params, "SecretId")?;
    let raw_timestamp = param(params, "Timestamp")?;
    let timestamp: i64 = raw_timestamp
        .parse()
        .map_err(|_| AuthError::InvalidTimestamp(raw_timestamp.to_owned()))?;

    let sign_method = match param(params, "SignatureMethod") {
        Ok(name) => name
            .parse::<SignMethod>()
            .map_err(AuthError::UnsupportedAlgorithm)?,
        Err(_) => SignMethod::HmacSha1,
    };

    let secret_key = provider.get_secret_key(secret_id)?;

    debug!(secret_id, sign_method = %sign_method, "Verifying legacy signature");

    let expected = sign_legacy(sign_method, http_method, host, params, &secret_key)?;

    if expected.as_bytes().ct_eq(signature.as_bytes()).into() {
        Ok(AuthResult {
            secret_id: secret_id.to_owned(),
            service: host.split('.').next().unwrap_or_default().to_owned(),
            date: utc_date(timestamp)?,
            signed_headers: Vec::new(),
        })
    } else {
        debug!(expected = %expected, provided = %signature, "Legacy signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}

fn param<'a>(params: &'a [(String, String)], name: &str) -> Result<&'a str, AuthError> {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .ok_or_else(|| AuthError::MissingParam(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticSecretKeyProvider;

    const SECRET_ID: &str = "AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE";
    const SECRET_KEY: &str = "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE";

    fn describe_instances() -> Vec<(String, String)> {
        [
            ("Action", "DescribeInstances"),
            ("InstanceIds.0", "ins-09dx96dg"),
            ("Limit", "20"),
            ("Nonce", "11886"),
            ("Offset", "0"),
            ("Region", "ap-guangzhou"),
            ("SecretId", SECRET_ID),
            ("Timestamp", "1465185768"),
            ("Version", "2017-03-12"),
        ]
        .into_iter()
        .rev()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn test_should_sort_params_in_string_to_sign() {
        let sts = build_string_to_sign("GET", "cvm.tencentcloudapi.com", &describe_instances());
        assert_eq!(
            sts,
            "GETcvm.tencentcloudapi.com/?Action=DescribeInstances&InstanceIds.0=ins-09dx96dg\
             &Limit=20&Nonce=11886&Offset=0&Region=ap-guangzhou\
             &SecretId=AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE&Timestamp=1465185768&Version=2017-03-12"
        );
    }

    #[test]
    fn test_should_reproduce_known_hmac_sha1_signature() {
        let sig = sign_legacy(
            SignMethod::HmacSha1,
            "GET",
            "cvm.tencentcloudapi.com",
            &describe_instances(),
            SECRET_KEY,
        )
        .unwrap();
        assert_eq!(sig, "EliP9YW3pW28FpsEdkXt/+WcGeI=");
    }

    #[test]
    fn test_should_reproduce_known_hmac_sha256_signature() {
        let sig = sign_legacy(
            SignMethod::HmacSha256,
            "GET",
            "cvm.tencentcloudapi.com",
            &describe_instances(),
            SECRET_KEY,
        )
        .unwrap();
        assert_eq!(sig, "bR/zQ3QqOmcEYeRv71IzG/NxfisUDgy9cqRMQC+UB5g=");
    }

    #[test]
    fn test_should_refuse_tc3_as_parameter_signature() {
        assert!(matches!(
            compute_signature(SignMethod::Tc3HmacSha256, SECRET_KEY, "x"),
            Err(AuthError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_should_verify_signed_params() {
        let provider =
            StaticSecretKeyProvider::new(vec![(SECRET_ID.to_owned(), SECRET_KEY.to_owned())]);
        let mut params = describe_instances();
        params.push(("SignatureMethod".to_owned(), "HmacSHA256".to_owned()));
        let sig = sign_legacy(
            SignMethod::HmacSha256,
            "POST",
            "cvm.tencentcloudapi.com",
            &params,
            SECRET_KEY,
        )
        .unwrap();
        params.push((SIGNATURE_PARAM.to_owned(), sig));

        let result = verify_legacy("POST", "cvm.tencentcloudapi.com", &params, &provider).unwrap();
        assert_eq!(result.secret_id, SECRET_ID);
        assert_eq!(result.service, "cvm");
        assert_eq!(result.date, "2016-06-06");
    }

    #[test]
    fn test_should_reject_tampered_params() {
        let provider =
            StaticSecretKeyProvider::new(vec![(SECRET_ID.to_owned(), SECRET_KEY.to_owned())]);
        let mut params = describe_instances();
        let sig = sign_legacy(
            SignMethod::HmacSha1,
            "GET",
            "cvm.tencentcloudapi.com",
            &params,
            SECRET_KEY,
        )
        .unwrap();
        params.push((SIGNATURE_PARAM.to_owned(), sig));
        params[0].1 = "100".to_owned();

        assert_eq!(
            verify_legacy("GET", "cvm.tencentcloudapi.com", &params, &provider),
            Err(AuthError::SignatureDoesNotMatch)
        );
    }

    #[test]
    fn test_should_require_signature_param() {
        let provider = StaticSecretKeyProvider::default();
        assert_eq!(
            verify_legacy("GET", "cvm.tencentcloudapi.com", &describe_instances(), &provider),
            Err(AuthError::MissingParam("Signature".to_owned()))
        );
    }
}
