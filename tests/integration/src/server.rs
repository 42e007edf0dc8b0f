//! Local stand-in for the Tencent Cloud API.
//!
//! Accepts TC3 and legacy signed requests, rejects bad signatures the way the
//! real service does (HTTP 200 with an `AuthFailure.*` error envelope), and
//! records every accepted request.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::request::Parts;
use http::{HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tencentcloud_auth::{AuthError, StaticSecretKeyProvider, verify_legacy, verify_tc3};
use tencentcloud_codec::params_to_value;
use tencentcloud_sdk::ClientProfile;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Secret id accepted by every [`MockServer`].
pub const SECRET_ID: &str = "AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE";

/// Secret key matching [`SECRET_ID`].
pub const SECRET_KEY: &str = "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE";

/// Canned answer for one action.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Success payload; `RequestId` is filled in unless present.
    Payload(Value),
    /// Business error envelope.
    Error {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
    },
    /// Arbitrary status and body, sent verbatim.
    Raw {
        /// HTTP status.
        status: StatusCode,
        /// Response body.
        body: String,
    },
}

impl Reply {
    /// Business error with the given code.
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self::Error {
            code: code.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// A request that passed signature verification.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: Method,
    /// Action name, from `X-TC-Action` or the `Action` parameter.
    pub action: String,
    /// API version.
    pub version: String,
    /// Region, if one was sent.
    pub region: Option<String>,
    /// Whether the request carried a TC3 `Authorization` header.
    pub tc3: bool,
    /// Request parameters as a JSON tree.
    pub params: Value,
}

#[derive(Debug)]
struct Rejection {
    code: &'static str,
    message: String,
}

impl From<AuthError> for Rejection {
    fn from(err: AuthError) -> Self {
        let code = match &err {
            AuthError::SecretIdNotFound(_) => "AuthFailure.SecretIdNotFound",
            AuthError::SignatureDoesNotMatch => "AuthFailure.SignatureFailure",
            AuthError::InvalidTimestamp(_) => "AuthFailure.SignatureExpire",
            _ => "AuthFailure.InvalidAuthorization",
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

fn invalid_parameter(message: impl Into<String>) -> Rejection {
    Rejection {
        code: "InvalidParameter",
        message: message.into(),
    }
}

#[derive(Debug)]
struct ServerState {
    secrets: StaticSecretKeyProvider,
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ServerState {
    fn admit(&self, parts: &Parts, body: &[u8]) -> Result<RecordedRequest, Rejection> {
        if parts.headers.contains_key(AUTHORIZATION) {
            self.admit_tc3(parts, body)
        } else {
            self.admit_legacy(parts, body)
        }
    }

    fn admit_tc3(&self, parts: &Parts, body: &[u8]) -> Result<RecordedRequest, Rejection> {
        verify_tc3(parts, body, &self.secrets)?;

        let params = if parts.method == Method::GET {
            let pairs = parse_pairs(parts.uri.query().unwrap_or_default().as_bytes());
            params_to_value(&pairs).map_err(|e| invalid_parameter(e.to_string()))?
        } else {
            serde_json::from_slice(body).map_err(|e| invalid_parameter(e.to_string()))?
        };

        Ok(RecordedRequest {
            method: parts.method.clone(),
            action: header(parts, "x-tc-action").unwrap_or_default().to_owned(),
            version: header(parts, "x-tc-version").unwrap_or_default().to_owned(),
            region: header(parts, "x-tc-region").map(ToOwned::to_owned),
            tc3: true,
            params,
        })
    }

    fn admit_legacy(&self, parts: &Parts, body: &[u8]) -> Result<RecordedRequest, Rejection> {
        let raw = if parts.method == Method::GET {
            parts.uri.query().unwrap_or_default().as_bytes()
        } else {
            body
        };
        let pairs = parse_pairs(raw);
        let host = header(parts, HOST.as_str()).unwrap_or_default();
        verify_legacy(parts.method.as_str(), host, &pairs, &self.secrets)?;

        let find = |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };
        Ok(RecordedRequest {
            method: parts.method.clone(),
            action: find("Action").unwrap_or_default(),
            version: find("Version").unwrap_or_default(),
            region: find("Region"),
            tc3: false,
            params: params_to_value(&pairs).map_err(|e| invalid_parameter(e.to_string()))?,
        })
    }

    fn reply_for(&self, action: &str, request_id: &str) -> (StatusCode, String) {
        let reply = self.replies.lock().get(action).cloned();
        match reply {
            Some(Reply::Payload(mut payload)) => {
                if let Value::Object(map) = &mut payload {
                    map.entry("RequestId")
                        .or_insert_with(|| Value::String(request_id.to_owned()));
                }
                (StatusCode::OK, json!({ "Response": payload }).to_string())
            }
            Some(Reply::Error { code, message }) => {
                (StatusCode::OK, error_envelope(&code, &message, request_id))
            }
            Some(Reply::Raw { status, body }) => (status, body),
            None => (
                StatusCode::OK,
                error_envelope(
                    "InvalidAction",
                    &format!("action {action} is not registered"),
                    request_id,
                ),
            ),
        }
    }
}

/// A signature-checking API server bound to `127.0.0.1` on a random port.
///
/// The accept loop is aborted when the server is dropped.
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Bind and start serving.
    pub async fn start() -> anyhow::Result<Self> {
        crate::init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ServerState {
            secrets: StaticSecretKeyProvider::new([(
                SECRET_ID.to_owned(),
                SECRET_KEY.to_owned(),
            )]),
            replies: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        });
        let task = tokio::spawn(accept_loop(listener, Arc::clone(&state)));

        debug!(%addr, "mock server listening");
        Ok(Self { addr, state, task })
    }

    /// Address the server listens on.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// A client profile pointing at this server over plain HTTP.
    #[must_use]
    pub fn profile(&self) -> ClientProfile {
        let mut profile = ClientProfile::default();
        profile.http.scheme = "http".to_owned();
        profile.http.endpoint = Some(self.addr.to_string());
        profile
    }

    /// Answer `action` with `reply` from now on.
    pub fn reply(&self, action: &str, reply: Reply) {
        self.state.replies.lock().insert(action.to_owned(), reply);
    }

    /// Requests accepted so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn accept_loop(listener: TcpListener, state: Arc<ServerState>) {
    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "failed to accept connection");
                continue;
            }
        };

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            let svc = service_fn(move |req| handle(Arc::clone(&state), req));
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), svc)
                .await
            {
                debug!(%peer_addr, error = %e, "connection error");
            }
        });
    }
}

async fn handle(
    state: Arc<ServerState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let request_id = uuid::Uuid::new_v4().to_string();

    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            let envelope = error_envelope("InvalidParameter", &e.to_string(), &request_id);
            return Ok(respond(StatusCode::OK, envelope));
        }
    };

    let (status, envelope) = match state.admit(&parts, &body) {
        Ok(recorded) => {
            debug!(action = %recorded.action, tc3 = recorded.tc3, "accepted request");
            let action = recorded.action.clone();
            state.requests.lock().push(recorded);
            state.reply_for(&action, &request_id)
        }
        Err(rejection) => {
            debug!(code = rejection.code, message = %rejection.message, "rejected request");
            (
                StatusCode::OK,
                error_envelope(rejection.code, &rejection.message, &request_id),
            )
        }
    };

    Ok(respond(status, envelope))
}

fn respond(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn error_envelope(code: &str, message: &str, request_id: &str) -> String {
    json!({
        "Response": {
            "Error": { "Code": code, "Message": message },
            "RequestId": request_id,
        }
    })
    .to_string()
}

fn parse_pairs(raw: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(raw).into_owned().collect()
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}
