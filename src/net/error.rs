//! Error type for REST and notification calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by API helpers.
///
/// Variants carry strings rather than source errors so they stay `Clone`
/// and can be stored in reactive state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    /// The request body could not be encoded.
    #[error("encode failed: {0}")]
    Encode(String),
    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
    /// HTTP is only available in the hydrated browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text shown to the user: the server's error body when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => body.trim().to_owned(),
            other => other.to_string(),
        }
    }
}
