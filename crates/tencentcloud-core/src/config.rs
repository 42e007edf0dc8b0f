//! Client and HTTP profiles.
//!
//! Profiles are plain values fixed at client construction. They can be built in
//! code or loaded from `TENCENTCLOUD_*` environment variables.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Request signature scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum SignMethod {
    /// `TC3-HMAC-SHA256`: header-based signature over a canonical request.
    #[default]
    #[serde(rename = "TC3-HMAC-SHA256")]
    Tc3HmacSha256,
    /// Legacy `HmacSHA256` signature over the sorted parameter list.
    #[serde(rename = "HmacSHA256")]
    HmacSha256,
    /// Legacy `HmacSHA1` signature over the sorted parameter list.
    #[serde(rename = "HmacSHA1")]
    HmacSha1,
}

impl SignMethod {
    /// Returns the wire name of the signature method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tc3HmacSha256 => "TC3-HMAC-SHA256",
            Self::HmacSha256 => "HmacSHA256",
            Self::HmacSha1 => "HmacSHA1",
        }
    }
}

impl fmt::Display for SignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TC3-HMAC-SHA256" => Ok(Self::Tc3HmacSha256),
            "HmacSHA256" => Ok(Self::HmacSha256),
            "HmacSHA1" => Ok(Self::HmacSha1),
            other => Err(other.to_owned()),
        }
    }
}

/// HTTP method used to carry the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Parameters travel in the body.
    #[default]
    Post,
    /// Parameters travel in the query string.
    Get,
}

impl HttpMethod {
    /// Returns the method name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("POST") {
            Ok(Self::Post)
        } else if s.eq_ignore_ascii_case("GET") {
            Ok(Self::Get)
        } else {
            Err(s.to_owned())
        }
    }
}

/// Language of remote error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    /// Simplified Chinese.
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// English.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh-CN" => Ok(Self::ZhCn),
            "en-US" => Ok(Self::EnUs),
            other => Err(other.to_owned()),
        }
    }
}

/// HTTP-level settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpProfile {
    /// HTTP method used for every call.
    pub method: HttpMethod,
    /// URI scheme, `https` unless talking to a local test server.
    pub scheme: String,
    /// Explicit endpoint host (may include a port). Overrides `<service>.<root_domain>`.
    pub endpoint: Option<String>,
    /// Root domain the default endpoint is built from.
    pub root_domain: String,
    /// Timeout for one network exchange.
    pub timeout: Duration,
}

impl HttpProfile {
    /// Default root domain of the public API.
    pub const DEFAULT_ROOT_DOMAIN: &'static str = "tencentcloudapi.com";
    /// Default timeout for one exchange.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
}

impl Default for HttpProfile {
    fn default() -> Self {
        Self {
            method: HttpMethod::Post,
            scheme: "https".to_owned(),
            endpoint: None,
            root_domain: Self::DEFAULT_ROOT_DOMAIN.to_owned(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// Per-client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Signature scheme.
    pub sign_method: SignMethod,
    /// Language of remote error messages; the remote default when `None`.
    pub language: Option<Language>,
    /// HTTP-level settings.
    pub http: HttpProfile,
}

impl ClientProfile {
    /// Load the profile from `TENCENTCLOUD_*` environment variables.
    ///
    /// Unset variables keep their defaults; set but unparseable variables are
    /// rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the profile through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut profile = Self::default();

        if let Some(v) = get("TENCENTCLOUD_SIGN_METHOD") {
            profile.sign_method = parse_value("TENCENTCLOUD_SIGN_METHOD", &v)?;
        }
        if let Some(v) = get("TENCENTCLOUD_LANGUAGE") {
            profile.language = Some(parse_value("TENCENTCLOUD_LANGUAGE", &v)?);
        }
        if let Some(v) = get("TENCENTCLOUD_HTTP_METHOD") {
            profile.http.method = parse_value("TENCENTCLOUD_HTTP_METHOD", &v)?;
        }
        if let Some(v) = get("TENCENTCLOUD_SCHEME") {
            if v != "https" && v != "http" {
                return Err(invalid("TENCENTCLOUD_SCHEME", &v));
            }
            profile.http.scheme = v;
        }
        if let Some(v) = get("TENCENTCLOUD_ENDPOINT") {
            profile.http.endpoint = Some(v);
        }
        if let Some(v) = get("TENCENTCLOUD_ROOT_DOMAIN") {
            profile.http.root_domain = v;
        }
        if let Some(v) = get("TENCENTCLOUD_REQUEST_TIMEOUT") {
            let secs: u64 = parse_value("TENCENTCLOUD_REQUEST_TIMEOUT", &v)?;
            if secs == 0 {
                return Err(invalid("TENCENTCLOUD_REQUEST_TIMEOUT", &v));
            }
            profile.http.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(
            sign_method = %profile.sign_method,
            http_method = profile.http.method.as_str(),
            endpoint = ?profile.http.endpoint,
            "loaded client profile"
        );

        Ok(profile)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}
