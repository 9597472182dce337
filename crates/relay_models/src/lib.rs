//! LLM provider integrations for Relay.
//!
//! Each provider is feature-gated and implements
//! [`TextGenerator`](relay_interface::TextGenerator).

#[cfg(feature = "bedrock")]
mod bedrock;

#[cfg(feature = "bedrock")]
pub use bedrock::{
    BedrockClient, BedrockConfig, BedrockConfigBuilder, TITAN_TEXT_EXPRESS, TITAN_TEXT_LITE,
    TitanRequest, TitanResponse, TitanResult, TitanTextGenerationConfig, from_titan_response,
    to_titan_request,
};
