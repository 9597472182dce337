//! Amazon Bedrock runtime driver for Titan text models.
//!
//! Requests go through `InvokeModel` with the Titan JSON body. SDK-level
//! retries are disabled so the caller's retry policy owns the attempt budget.

mod client;
mod config;
mod conversions;
mod dto;
mod errors;

pub use client::BedrockClient;
pub use config::{BedrockConfig, BedrockConfigBuilder, TITAN_TEXT_EXPRESS, TITAN_TEXT_LITE};
pub use conversions::{from_titan_response, to_titan_request};
pub use dto::{TitanRequest, TitanResponse, TitanResult, TitanTextGenerationConfig};
