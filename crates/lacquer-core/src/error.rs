use thiserror::Error;

/// Failure while retrieving content from the API.
///
/// This is the only failure class in the navigation core: stack operations
/// themselves are total. A fetch failure never mutates the stack and never
/// records a history entry; callers observe it as a value.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, TLS)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server responded with a non-success status
    #[error("server returned HTTP {code}")]
    Status { code: u16 },

    /// Response body could not be decoded
    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),
}
