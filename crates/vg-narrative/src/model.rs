//! Blocking HTTP client for an Ollama-style generation endpoint.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::NarrativeError;

/// Client for a local text-generation server speaking the Ollama API.
#[derive(Debug)]
pub struct ModelClient {
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    http: reqwest::blocking::Client,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl ModelClient {
    /// Build a client for the given endpoint. Fails only if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self, NarrativeError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
            max_tokens,
            http,
        })
    }

    /// One-time capability probe: is the endpoint reachable?
    pub fn probe(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.http.get(&url).send() {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("model endpoint probe failed: {e}");
                false
            }
        }
    }

    /// Request a continuation of the prompt. Errors are expected to be
    /// absorbed by the caller's fallback, never shown to the player.
    pub fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.temperature,
                "num_predict": self.max_tokens,
            }
        });

        let resp = self.http.post(&url).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(NarrativeError::Status(resp.status().as_u16()));
        }

        let parsed: GenerateResponse = resp
            .json()
            .map_err(|e| NarrativeError::InvalidResponse(e.to_string()))?;
        let text = parsed.response.trim().to_string();
        if text.is_empty() {
            return Err(NarrativeError::InvalidResponse(
                "empty completion".to_string(),
            ));
        }
        Ok(text)
    }
}
