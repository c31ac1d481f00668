/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when encoding or decoding game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A saved record could not be decoded into a [`crate::GameState`].
    #[error("failed to decode saved state: {0}")]
    Decode(#[source] serde_json::Error),

    /// A game state could not be encoded into its record form.
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}
