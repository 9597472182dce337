//! Request types for text generation.

use derive_builder::Builder;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent alongside the prompt.
///
/// Values are passed through to the provider unchecked; each provider
/// defines its own accepted ranges.
///
/// # Examples
///
/// ```
/// use relay_core::GenerationConfig;
///
/// let config = GenerationConfig::builder().max_token_count(512).build().unwrap();
/// assert_eq!(*config.max_token_count(), 512);
/// assert_eq!(*config.temperature(), 0.7);
/// assert_eq!(*config.top_p(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Setters, Builder)]
#[builder(default)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GenerationConfig {
    /// Upper bound on generated tokens
    max_token_count: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus-sampling probability mass
    top_p: f32,
    /// Sequences that stop generation when produced
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    stop_sequences: Vec<String>,
}

impl GenerationConfig {
    /// Creates a new generation config.
    pub fn new(max_token_count: u32, temperature: f32, top_p: f32) -> Self {
        Self {
            max_token_count,
            temperature,
            top_p,
            stop_sequences: Vec::new(),
        }
    }

    /// Returns a builder for constructing a GenerationConfig.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(200, 0.7, 1.0)
    }
}

/// A single text generation request.
///
/// # Examples
///
/// ```
/// use relay_core::GenerateRequest;
///
/// let request = GenerateRequest::new("Who are you?");
/// assert_eq!(request.prompt(), "Who are you?");
/// assert_eq!(*request.generation().max_token_count(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Setters, Builder)]
#[setters(prefix = "with_")]
pub struct GenerateRequest {
    /// Prompt text
    #[builder(setter(into))]
    #[setters(into)]
    prompt: String,
    /// Sampling parameters
    #[builder(default)]
    generation: GenerationConfig,
}

impl GenerateRequest {
    /// Creates a request with default generation parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            generation: GenerationConfig::default(),
        }
    }

    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}
