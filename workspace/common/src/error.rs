use thiserror::Error;

/// Failures of a dashboard API call.
///
/// The page shows one fixed message for all of them; the variant only
/// matters for the diagnostic log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network or browser fetch failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Backend answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
