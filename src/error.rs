//! Error types for the Kickbox client.

use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) calls.
///
/// These cover building the request, the HTTP round trip and decoding the
/// body. Failures the service reports inside a well-formed body (bad API key,
/// exhausted credits) are not errors at this level; they are carried by the
/// response types and surfaced through [`ServiceError`].
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// A caller supplied header value is not a valid HTTP header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The HTTP client or request could not be constructed.
    #[error("failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    /// Network failure, timeout or body read failure during the round trip.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a zero-length body.
    #[error("empty body response received from service")]
    EmptyResponse,

    /// The body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A failure reported by the service inside the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service explained what went wrong.
    #[error("{0}")]
    Message(String),

    /// `success` was false and no message was given.
    #[error("unknown error verifying email")]
    Unknown,
}

impl ServiceError {
    pub(crate) fn from_envelope(success: bool, message: Option<&str>) -> Option<Self> {
        if success {
            return None;
        }
        match message {
            Some(message) if !message.is_empty() => Some(Self::Message(message.to_string())),
            _ => Some(Self::Unknown),
        }
    }
}
