//! Narrator abstraction for Vagante.
//!
//! The command interpreter asks a [`Narrator`] for descriptive text and
//! never sees an error: a model-backed narrator absorbs every failure into
//! a template fallback line. Which variant backs a session is decided once,
//! at construction, by probing the configured endpoint.

/// Errors internal to the model client. Never cross [`Narrator::generate`].
pub mod error;
/// Blocking HTTP client for an Ollama-style generation endpoint.
pub mod model;
/// Italian prompt builders for every narrated situation.
pub mod prompt;
/// Template fallback lines.
pub mod templates;

mod narrator;

/// Re-export the narrator and its configuration.
pub use narrator::{Narrator, NarratorConfig};

/// Re-export the model client and fallback generator.
pub use error::NarrativeError;
pub use model::ModelClient;
pub use templates::TemplateNarrator;
