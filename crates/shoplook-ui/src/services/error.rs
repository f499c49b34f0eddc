//! Gateway error type.
//!
//! # Design
//! - `Display` is the text shown in the retry panel, so every variant carries a readable message.
//! - Server-supplied messages take precedence over generic status text.

use serde::Deserialize;
use thiserror::Error;

/// Failure talking to the gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{message}")]
    Network {
        /// Transport failure description.
        message: String,
    },
    /// The gateway answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or a generic status line.
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("{message}")]
    Decode {
        /// Decoder failure description.
        message: String,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Transport-level failure.
    #[must_use]
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            message: detail.into(),
        }
    }

    /// Body decoding failure.
    #[must_use]
    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            message: detail.into(),
        }
    }

    /// Non-success response, preferring a `message` or `error` field from a JSON body.
    #[must_use]
    pub fn from_status(status: u16, body: &str, status_text: &str) -> Self {
        let message = body_message(body).unwrap_or_else(|| {
            let text = status_text.trim();
            if text.is_empty() {
                format!("Request failed with status {status}")
            } else {
                format!("Request failed with status {status} ({text})")
            }
        });
        Self::Status { status, message }
    }

    /// HTTP status when the gateway responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}

fn body_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
