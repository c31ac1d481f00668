//! The narrator: capability-checked strategy over model and template
//! generation.

use std::time::Duration;

use tracing::{info, warn};

use crate::model::ModelClient;
use crate::templates::TemplateNarrator;

/// Configuration for building a [`Narrator`].
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    /// Generation endpoint base URL. `None` means template-only.
    pub endpoint: Option<String>,
    /// Model name requested from the endpoint.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens per completion.
    pub max_tokens: u32,
    /// Per-request timeout in seconds. Generation is a blocking call; this
    /// bound keeps a dead endpoint from stalling the session.
    pub timeout_secs: u64,
    /// Seed for the template fallback's line choice.
    pub seed: u64,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: "llama3.2".to_string(),
            temperature: 0.8,
            max_tokens: 200,
            timeout_secs: 30,
            seed: 42,
        }
    }
}

impl NarratorConfig {
    /// Set the generation endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the fallback seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Produces in-fiction descriptive text for the command interpreter.
///
/// The variant is chosen once at construction. [`Narrator::generate`] never
/// fails: model errors are logged and answered with a fallback line.
#[derive(Debug)]
pub enum Narrator {
    /// Model-backed generation with an embedded fallback for absorbed
    /// errors.
    Model {
        /// The HTTP client for the generation endpoint.
        client: ModelClient,
        /// Fallback used when a request fails mid-session.
        fallback: TemplateNarrator,
    },
    /// Template-only generation.
    Template(TemplateNarrator),
}

impl Narrator {
    /// Choose the backing variant from the config: if an endpoint is
    /// configured and answers a one-time probe, generation is model-backed;
    /// otherwise the narrator is template-only. The capability is never
    /// re-checked per call.
    pub fn detect(config: &NarratorConfig) -> Self {
        let fallback = TemplateNarrator::new(config.seed);
        if let Some(endpoint) = &config.endpoint {
            match ModelClient::new(
                endpoint,
                &config.model,
                config.temperature,
                config.max_tokens,
                Duration::from_secs(config.timeout_secs),
            ) {
                Ok(client) if client.probe() => {
                    info!("narrator: model endpoint {endpoint} available");
                    return Self::Model { client, fallback };
                }
                Ok(_) => {
                    warn!("narrator: endpoint {endpoint} unreachable, using templates");
                }
                Err(e) => {
                    warn!("narrator: cannot build model client ({e}), using templates");
                }
            }
        }
        Self::Template(fallback)
    }

    /// Build a template-only narrator with the given seed.
    pub fn template(seed: u64) -> Self {
        Self::Template(TemplateNarrator::new(seed))
    }

    /// True if generation is backed by a model endpoint.
    pub fn is_model_backed(&self) -> bool {
        matches!(self, Self::Model { .. })
    }

    /// Produce text for a prompt. Never fails.
    pub fn generate(&mut self, prompt: &str) -> String {
        match self {
            Self::Model { client, fallback } => match client.generate(prompt) {
                Ok(text) => text,
                Err(e) => {
                    warn!("narrator: generation failed ({e}), falling back");
                    fallback.generate(prompt)
                }
            },
            Self::Template(fallback) => fallback.generate(prompt),
        }
    }
}
