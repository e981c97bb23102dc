use serde_json::Value;
use thiserror::Error;

/// A failed API call.
///
/// Every variant displays as nothing but its human-readable message, which is
/// what the panels put in their error area.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A request body could not be encoded or a response body decoded.
    #[error("{0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Serialization(err.to_string()),
            err => ApiError::Network(err.to_string()),
        }
    }
}

/// Builds the message for a non-success response.
///
/// The body is tried as a JSON error payload first (`detail` as the backend
/// sends it, or `message`); otherwise the status text is used, and if that is
/// empty too the numeric status.
pub fn status_error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|payload| payload_message(&payload))
        .or_else(|| {
            let text = status_text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

fn payload_message(payload: &Value) -> Option<String> {
    let field = payload.get("detail").or_else(|| payload.get("message"))?;
    match field {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        // Validation failures come back as a list of `{ loc, msg, type }`.
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
