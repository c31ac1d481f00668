use thiserror::Error;

use crate::store::StoreError;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can escape the engine.
///
/// Unknown commands, invalid directions, and absent dialogue targets are
/// user-visible responses, not errors; only infrastructure failures reach
/// this type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The persistence gateway failed. The host must report this, never
    /// swallow it.
    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}
