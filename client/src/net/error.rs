//! Failure taxonomy for calls to the crop service.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is terminal for the attempt that produced it: callers turn
//! it into inline UI state and never retry automatically. There is no
//! distinct not-found or conflict case; those arrive as `Status`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed request to the crop service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// Remote calls only run in the browser build.
    #[error("crop service is not available on the server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for the inline error line: the service's own message
    /// when it sent one, otherwise a generic description.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message), ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    /// Build a `Status` error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Self::Status { status, message }
    }
}
