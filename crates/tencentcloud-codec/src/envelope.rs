//! Response envelope decoding.
//!
//! Every response body has the shape:
//!
//! ```json
//! { "Response": { "RequestId": "...", ...payload } }
//! { "Response": { "RequestId": "...", "Error": { "Code": "...", "Message": "..." } } }
//! ```

use serde_json::{Map, Value};
use tencentcloud_core::{ApiError, DecodeError, SdkError};

use crate::unflatten::{Unflatten, unflatten_object};

const RESPONSE: &str = "Response";

/// The `Error` object of a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeError {
    /// Remote error code.
    pub code: String,
    /// Remote error message.
    pub message: String,
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    /// `Response.RequestId`, if present.
    pub request_id: Option<String>,
    /// `Response.Error`, if present.
    pub error: Option<EnvelopeError>,
    /// The full `Response` object, `RequestId` included.
    pub payload: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Split the envelope into its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Api`] if the envelope carries an error, or
    /// [`SdkError::Decode`] if a success envelope lacks `RequestId`.
    pub fn into_payload(self) -> Result<Map<String, Value>, SdkError> {
        if let Some(error) = self.error {
            return Err(ApiError {
                code: error.code,
                message: error.message,
                request_id: self.request_id.unwrap_or_default(),
            }
            .into());
        }
        if self.request_id.is_none() {
            return Err(DecodeError::new("Response.RequestId", "missing required field").into());
        }
        Ok(self.payload)
    }
}

/// Decode a raw response body into an envelope.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not JSON or lacks the `Response`
/// object. An `Error` object needs a string `Code`; a missing `Message`
/// decodes as empty. A non-string `RequestId` is only rejected on success.
pub fn decode_envelope(body: &[u8]) -> Result<ResponseEnvelope, DecodeError> {
    let root: Value =
        serde_json::from_slice(body).map_err(|e| DecodeError::body(e.to_string()))?;

    let Value::Object(mut root) = root else {
        return Err(DecodeError::body("expected a JSON object"));
    };

    let payload = match root.remove(RESPONSE) {
        Some(Value::Object(payload)) => payload,
        Some(_) => return Err(DecodeError::new(RESPONSE, "expected object")),
        None => return Err(DecodeError::new(RESPONSE, "missing response object")),
    };

    let error = match payload.get("Error") {
        None | Some(Value::Null) => None,
        Some(Value::Object(error)) => Some(EnvelopeError {
            code: error_code(error)?,
            message: error_message(error),
        }),
        Some(_) => return Err(DecodeError::new("Response.Error", "expected object")),
    };

    // A rejection is reported as such even when its RequestId is malformed.
    let request_id = match payload.get("RequestId") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(_) if error.is_some() => None,
        Some(_) => {
            return Err(DecodeError::new(
                "Response.RequestId",
                "expected string",
            ));
        }
    };

    Ok(ResponseEnvelope {
        request_id,
        error,
        payload,
    })
}

fn error_code(error: &Map<String, Value>) -> Result<String, DecodeError> {
    error
        .get("Code")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| DecodeError::new("Response.Error.Code", "expected string"))
}

fn error_message(error: &Map<String, Value>) -> String {
    match error.get("Message") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
    }
}

/// Decode a raw response body straight into a response model.
///
/// A remote error never reaches the model: it is returned as
/// [`SdkError::Api`] before any field is read.
///
/// # Errors
///
/// Returns [`SdkError::Decode`] or [`SdkError::Api`].
pub fn decode_response<T: Unflatten>(body: &[u8]) -> Result<T, SdkError> {
    let payload = decode_envelope(body)?.into_payload()?;
    Ok(unflatten_object(&payload, RESPONSE)?)
}
