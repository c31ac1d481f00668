//! Command interpreter and session engine for Vagante.
//!
//! The engine maps one line of player input to state mutations, exactly one
//! narrative response string, and — when state changed — a full-state
//! persist. [`GameSession::process`] is the whole contract a front end
//! needs, whether it wraps a terminal loop or an HTTP endpoint.

/// Input normalization and verb dispatch.
pub mod command;
/// Session configuration.
pub mod config;
/// Random villain generation for encounters.
pub mod encounter;
/// Error types for the engine.
pub mod error;
/// The game session: dispatch, handlers, and the commit rule.
pub mod session;
/// Persistence gateway: the `StateStore` trait and its implementations.
pub mod store;

/// Re-export command parsing.
pub use command::{Command, Direction, parse_command};
/// Re-export configuration.
pub use config::SessionConfig;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export the session.
pub use session::GameSession;
/// Re-export the persistence gateway.
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError};
