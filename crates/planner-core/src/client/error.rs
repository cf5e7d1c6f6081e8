//! API Errors

use serde::Deserialize;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401 from the backend, or a protected call without a token
    #[error("not authenticated: {0}")]
    Unauthorized(String),

    /// Any other non-2xx status
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request never produced a response (network, CORS, DNS)
    #[error("request failed: {0}")]
    Transport(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build an error from a non-2xx response, preferring the backend's
    /// `detail` message over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| match b.detail {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.trim().to_string()
                }
            });

        if status == 401 {
            ApiError::Unauthorized(detail)
        } else {
            ApiError::Status { status, detail }
        }
    }

    /// Message suitable for showing inline next to a form
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Unauthorized(detail) => detail,
            ApiError::Status { detail, .. } => detail,
            ApiError::Transport(msg) | ApiError::Encode(msg) | ApiError::Decode(msg) => msg,
        }
    }

    /// The backend's own message, when there was a response at all
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(detail) | ApiError::Status { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}
