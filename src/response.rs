//! Response bodies and the status → error mapping.
//!
//! Successful bodies are passed through as [`ResponseBody`]. Any non-2xx status is
//! turned into [`Error::Api`] with a message pulled from the error body. The mapping
//! is a pure function of `(status, body)`.
//!
//! Known error body shapes:
//!
//! ```text
//! {"detail": "Voice not found"}
//! {"detail": {"status": "quota_exceeded", "message": "Not enough credits"}}
//! {"detail": [{"loc": ["body", "text"], "msg": "field required", "type": "value_error.missing"}]}
//! ```

use crate::error_code::ApiErrorKind;
use crate::{Error, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Separator between validation messages when a 422 body lists several problems.
pub const VALIDATION_MESSAGE_SEPARATOR: &str = "; ";

/// A successful response body, decoded according to its content type.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Bytes(Bytes),
    Text(String),
    Empty,
}

impl ResponseBody {
    /// Picks the variant from the `content-type` header. Without one, JSON is
    /// attempted before falling back to raw bytes.
    pub fn from_parts(content_type: Option<&str>, bytes: Bytes) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(ResponseBody::Empty);
        }
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/json" || mime.ends_with("+json") {
            return Ok(ResponseBody::Json(serde_json::from_slice(&bytes)?));
        }
        if mime.starts_with("text/") {
            return Ok(ResponseBody::Text(String::from_utf8_lossy(&bytes).into_owned()));
        }
        if mime.is_empty() {
            if let Ok(v) = serde_json::from_slice::<Value>(&bytes) {
                return Ok(ResponseBody::Json(v));
            }
        }
        Ok(ResponseBody::Bytes(bytes))
    }

    /// JSON view of the body. `Empty` becomes `null`; bytes and text are parsed.
    pub fn into_json(self) -> Result<Value> {
        match self {
            ResponseBody::Json(v) => Ok(v),
            ResponseBody::Bytes(b) => Ok(serde_json::from_slice(&b)?),
            ResponseBody::Text(t) => Ok(serde_json::from_str(&t)?),
            ResponseBody::Empty => Ok(Value::Null),
        }
    }

    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            ResponseBody::Bytes(b) => Ok(b),
            ResponseBody::Text(t) => Ok(Bytes::from(t)),
            ResponseBody::Json(v) => Ok(Bytes::from(serde_json::to_vec(&v)?)),
            ResponseBody::Empty => Ok(Bytes::new()),
        }
    }

    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_json()?)?)
    }
}

/// Passes a 2xx body through and turns any other status into a typed error.
pub fn map_response(status: u16, body: ResponseBody) -> Result<ResponseBody> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let raw = match &body {
        ResponseBody::Json(v) => v.to_string(),
        ResponseBody::Text(t) => t.clone(),
        ResponseBody::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        ResponseBody::Empty => String::new(),
    };
    Err(error_for_status(status, &raw))
}

/// Builds the typed error for a non-2xx status from the raw error body.
pub fn error_for_status(status: u16, body: &str) -> Error {
    let kind = ApiErrorKind::from_http_status(status);
    let message = extract_message(body).unwrap_or_else(|| kind.default_message(status));
    Error::Api {
        kind,
        status,
        message,
    }
}

/// Best-effort human readable message from an error body.
///
/// Falls back from the structured message to the raw `detail`, then to the whole
/// body. Returns `None` only when the body is blank.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let json: Value = match serde_json::from_str(trimmed) {
        Ok(v) => v,
        Err(_) => return Some(trimmed.to_string()),
    };

    let message = match json.get("detail") {
        Some(Value::String(s)) => s.clone(),
        Some(detail @ Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                detail.to_string()
            } else {
                msgs.join(VALIDATION_MESSAGE_SEPARATOR)
            }
        }
        Some(detail @ Value::Object(obj)) => match obj.get("message").and_then(Value::as_str) {
            Some(m) => m.to_string(),
            None => detail.to_string(),
        },
        Some(detail) => detail.to_string(),
        None => match &json {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    };

    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}
