//! Wire types for the Titan text generation API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling parameters in Titan's request schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanTextGenerationConfig {
    /// Maximum tokens to generate
    pub max_token_count: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus-sampling probability
    pub top_p: f32,
    /// Stop sequences
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

/// Titan `InvokeModel` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct TitanRequest {
    /// Prompt text
    pub(crate) input_text: String,
    /// Sampling parameters
    pub(crate) text_generation_config: TitanTextGenerationConfig,
}

impl TitanRequest {
    /// Creates a new builder for TitanRequest.
    pub fn builder() -> TitanRequestBuilder {
        TitanRequestBuilder::default()
    }
}

/// One generated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResult {
    /// Tokens in the generated text
    #[serde(default)]
    pub token_count: Option<u32>,
    /// Generated text
    pub output_text: String,
    /// Why generation stopped (for example `FINISH` or `LENGTH`)
    #[serde(default)]
    pub completion_reason: Option<String>,
}

/// Titan `InvokeModel` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResponse {
    /// Tokens in the prompt
    #[serde(default)]
    pub input_text_token_count: Option<u32>,
    /// Generated results
    pub results: Vec<TitanResult>,
}
