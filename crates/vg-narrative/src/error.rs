use thiserror::Error;

/// Errors from the model-backed generation path.
///
/// These are absorbed inside [`crate::Narrator::generate`] and logged; the
/// caller always receives text.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// The HTTP request failed or timed out.
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("generation endpoint returned status {0}")]
    Status(u16),

    /// The endpoint's response body did not have the expected shape.
    #[error("unexpected generation response: {0}")]
    InvalidResponse(String),
}
