//! Building and signing outbound requests.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use tencentcloud_auth::legacy::{SIGNATURE_PARAM, sign_legacy};
use tencentcloud_auth::tc3::{Tc3Request, sign_tc3};
use tencentcloud_codec::{Params, flatten};
use tencentcloud_core::{
    ClientProfile, Credential, HttpMethod, Region, RequestError, ServiceDescriptor, SignMethod,
};

/// Value of the `X-TC-RequestClient` header.
pub const REQUEST_CLIENT: &str = concat!("SDK_RUST_", env!("CARGO_PKG_VERSION"));

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Everything besides the request model that goes into one signed request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Target service.
    pub descriptor: ServiceDescriptor,
    /// Operation name, e.g. `DetectFace`.
    pub action: &'a str,
    /// Target region; omitted from the wire when empty.
    pub region: &'a Region,
    /// Client settings.
    pub profile: &'a ClientProfile,
    /// Signing credential.
    pub credential: &'a Credential,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Random nonce for legacy signatures.
    pub nonce: u32,
}

impl RequestContext<'_> {
    /// Endpoint host, from the profile override or `<service>.<root_domain>`.
    #[must_use]
    pub fn host(&self) -> String {
        self.profile
            .http
            .endpoint
            .clone()
            .unwrap_or_else(|| self.descriptor.endpoint(&self.profile.http.root_domain))
    }
}

/// Build the signed HTTP request for one call.
///
/// # Errors
///
/// Returns [`RequestError`] if the model cannot be serialized, a header value
/// is not valid, the endpoint is not a valid URI, or signing fails.
pub fn build_request<Req: Serialize + ?Sized>(
    ctx: &RequestContext<'_>,
    request: &Req,
) -> Result<http::Request<Bytes>, RequestError> {
    match ctx.profile.sign_method {
        SignMethod::Tc3HmacSha256 => build_tc3(ctx, request),
        method @ (SignMethod::HmacSha1 | SignMethod::HmacSha256) => {
            build_legacy(ctx, method, request)
        }
    }
}

fn build_tc3<Req: Serialize + ?Sized>(
    ctx: &RequestContext<'_>,
    request: &Req,
) -> Result<http::Request<Bytes>, RequestError> {
    let host = ctx.host();
    let http_method = ctx.profile.http.method;

    let (content_type, query, body) = match http_method {
        HttpMethod::Post => {
            let body =
                serde_json::to_vec(request).map_err(|e| RequestError::Serialize(e.to_string()))?;
            (JSON_CONTENT_TYPE, String::new(), Bytes::from(body))
        }
        HttpMethod::Get => {
            let mut params = flatten(request).map_err(|e| RequestError::Serialize(e.to_string()))?;
            params.sort_by(|a, b| a.0.cmp(&b.0));
            (FORM_CONTENT_TYPE, encode(&params), Bytes::new())
        }
    };

    let authorization = sign_tc3(&Tc3Request {
        secret_id: &ctx.credential.secret_id,
        secret_key: &ctx.credential.secret_key,
        service: ctx.descriptor.service,
        host: &host,
        method: http_method.as_str(),
        query: &query,
        content_type,
        payload: &body,
        timestamp: ctx.timestamp,
    })
    .map_err(|e| RequestError::Sign(e.to_string()))?;

    let mut headers = HeaderMap::new();
    insert(&mut headers, "host", &host)?;
    insert(&mut headers, "content-type", content_type)?;
    insert(&mut headers, "x-tc-action", ctx.action)?;
    insert(&mut headers, "x-tc-timestamp", &ctx.timestamp.to_string())?;
    insert(&mut headers, "x-tc-version", ctx.descriptor.version)?;
    if !ctx.region.is_empty() {
        insert(&mut headers, "x-tc-region", ctx.region.as_str())?;
    }
    if let Some(token) = &ctx.credential.token {
        insert(&mut headers, "x-tc-token", token)?;
    }
    if let Some(language) = ctx.profile.language {
        insert(&mut headers, "x-tc-language", language.as_str())?;
    }
    insert(&mut headers, "x-tc-requestclient", REQUEST_CLIENT)?;
    insert(&mut headers, "authorization", &authorization)?;

    assemble(ctx, &host, &query, body, headers)
}

fn build_legacy<Req: Serialize + ?Sized>(
    ctx: &RequestContext<'_>,
    sign_method: SignMethod,
    request: &Req,
) -> Result<http::Request<Bytes>, RequestError> {
    let host = ctx.host();
    let http_method = ctx.profile.http.method;

    let mut params = flatten(request).map_err(|e| RequestError::Serialize(e.to_string()))?;
    push(&mut params, "Action", ctx.action);
    push(&mut params, "Version", ctx.descriptor.version);
    if !ctx.region.is_empty() {
        push(&mut params, "Region", ctx.region.as_str());
    }
    push(&mut params, "Timestamp", &ctx.timestamp.to_string());
    push(&mut params, "Nonce", &ctx.nonce.to_string());
    push(&mut params, "SecretId", &ctx.credential.secret_id);
    push(&mut params, "SignatureMethod", sign_method.as_str());
    if let Some(token) = &ctx.credential.token {
        push(&mut params, "Token", token);
    }
    if let Some(language) = ctx.profile.language {
        push(&mut params, "Language", language.as_str());
    }

    let signature = sign_legacy(
        sign_method,
        http_method.as_str(),
        &host,
        &params,
        &ctx.credential.secret_key,
    )
    .map_err(|e| RequestError::Sign(e.to_string()))?;
    push(&mut params, SIGNATURE_PARAM, &signature);

    let encoded = encode(&params);
    let mut headers = HeaderMap::new();
    insert(&mut headers, "host", &host)?;
    insert(&mut headers, "x-tc-requestclient", REQUEST_CLIENT)?;

    match http_method {
        HttpMethod::Post => {
            insert(&mut headers, "content-type", FORM_CONTENT_TYPE)?;
            assemble(ctx, &host, "", Bytes::from(encoded), headers)
        }
        HttpMethod::Get => assemble(ctx, &host, &encoded, Bytes::new(), headers),
    }
}

fn assemble(
    ctx: &RequestContext<'_>,
    host: &str,
    query: &str,
    body: Bytes,
    headers: HeaderMap,
) -> Result<http::Request<Bytes>, RequestError> {
    let scheme = &ctx.profile.http.scheme;
    let uri = if query.is_empty() {
        format!("{scheme}://{host}/")
    } else {
        format!("{scheme}://{host}/?{query}")
    };
    let uri: http::Uri = uri
        .parse()
        .map_err(|e| RequestError::InvalidEndpoint(format!("{host}: {e}")))?;

    let mut request = http::Request::new(body);
    *request.method_mut() = match ctx.profile.http.method {
        HttpMethod::Post => Method::POST,
        HttpMethod::Get => Method::GET,
    };
    *request.uri_mut() = uri;
    *request.headers_mut() = headers;
    Ok(request)
}

/// Insert a header; `name` must be a lowercase static token.
fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<(), RequestError> {
    let value = HeaderValue::from_str(value).map_err(|e| RequestError::InvalidHeader {
        name: name.to_owned(),
        message: e.to_string(),
    })?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

fn push(params: &mut Params, key: &str, value: &str) {
    params.push((key.to_owned(), value.to_owned()));
}

fn encode(params: &Params) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}
