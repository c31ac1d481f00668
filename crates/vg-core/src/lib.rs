//! Core types for Vagante: the player character, the persistent game state,
//! and the relationship/event ledger that gives the world continuity.
//!
//! This crate is independent of the command interpreter — you can construct
//! a [`GameState`] programmatically or decode one from a saved JSON record.
//! Decoding is defensive: any missing field falls back to the value a fresh
//! game would have used.

/// Character, ability scores, and derived modifiers.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Significant-event records appended over the course of a session.
pub mod event;
/// Per-character relationship records (trust, hostility, role).
pub mod relationship;
/// The persistent game state aggregate and its JSON record form.
pub mod state;

/// Re-export character types.
pub use character::{Ability, AbilityScores, Character, MAX_HP, ability_modifier};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export event types.
pub use event::{EventKind, GameEvent};
/// Re-export relationship types.
pub use relationship::{Relationship, Role};
/// Re-export game state types.
pub use state::{GameState, language_for_region};
