//! Generation request types for Confab.
//!
//! The data shape handed to a text-generation engine: a fully rendered
//! prompt plus sampling parameters. Engines treat the prompt as opaque
//! text; the core treats the sampling knobs the same way.

use serde::{Deserialize, Serialize};

use crate::config::SamplingParams;

/// A single generation call against an engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Rendered prompt text (already chat-templated).
    pub prompt: String,
    /// Sampling parameters forwarded to the engine.
    pub sampling: SamplingParams,
    /// Sequences at which the engine should stop generating.
    #[serde(default)]
    pub stop: Vec<String>,
}

impl GenerationRequest {
    /// Build a request from a rendered prompt and sampling config.
    pub fn new(prompt: String, sampling: SamplingParams, stop: Vec<String>) -> Self {
        Self {
            prompt,
            sampling,
            stop,
        }
    }
}
