//! Response normalization.
//!
//! Every service response, whatever it looks like on the wire, is folded
//! into the `{ ok, data, error }` envelope before callers see it:
//!
//! | Body                        | HTTP  | Envelope                         |
//! |-----------------------------|-------|----------------------------------|
//! | `{ ok: true, data }`        | any   | `ok`, `data`                     |
//! | `{ ok: false, error }`      | any   | `!ok`, `error`                   |
//! | JSON without `ok`           | 2xx   | `ok`, whole body as `data`       |
//! | JSON without `ok`           | other | `!ok`, `HTTP <status>: <body>`   |
//! | not JSON                    | any   | `!ok`, status line and raw text  |

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Fallback message when the service reports failure without one.
pub const GENERIC_FAILURE: &str = "request failed";

/// Longest slice of a non-JSON body kept in error messages.
const MAX_BODY_SNIPPET: usize = 200;

/// Normalized `{ ok, data, error }` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status of a failed non-JSON response
    #[serde(skip)]
    pub status: Option<u16>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            status: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
            status: None,
        }
    }

    /// Fold an HTTP status and raw body into an envelope.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let success = (200..300).contains(&status);

        let parsed: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => {
                let text = snippet(body);
                let mut env = if success {
                    Self::failure(format!("unexpected non-JSON response: {}", text))
                } else {
                    Self::failure(format!("HTTP {}: {}", status, text))
                };
                env.status = Some(status);
                return env;
            }
        };

        match parsed.get("ok").and_then(Value::as_bool) {
            Some(true) => Self::success(parsed.get("data").cloned().unwrap_or(Value::Null)),
            Some(false) => Self::failure(
                parsed
                    .get("error")
                    .and_then(error_text)
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ),
            None if success => Self::success(parsed),
            None => {
                let mut env = Self::failure(format!("HTTP {}: {}", status, parsed));
                env.status = Some(status);
                env
            }
        }
    }

    /// Human-readable error, if this is a failure.
    pub fn error_message(&self) -> Option<&str> {
        if self.ok {
            None
        } else {
            Some(self.error.as_deref().unwrap_or(GENERIC_FAILURE))
        }
    }

    /// Turn the envelope into the payload or a typed error.
    pub fn into_result(self) -> ClientResult<Value> {
        if self.ok {
            return Ok(self.data.unwrap_or(Value::Null));
        }
        let message = self.error.unwrap_or_else(|| GENERIC_FAILURE.to_string());
        match self.status {
            Some(status) => Err(ClientError::HttpStatus {
                status,
                body: message
                    .strip_prefix(&format!("HTTP {}: ", status))
                    .map(str::to_string)
                    .unwrap_or(message),
            }),
            None => Err(ClientError::Api(message)),
        }
    }
}

/// Decode a payload into a typed response body.
pub fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

fn error_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null => None,
        Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "(empty body)".to_string();
    }
    match text.char_indices().nth(MAX_BODY_SNIPPET) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
