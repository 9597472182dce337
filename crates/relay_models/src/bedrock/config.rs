//! Explicit client configuration for Bedrock.

use derive_builder::Builder;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Titan Text Express model identifier.
pub const TITAN_TEXT_EXPRESS: &str = "amazon.titan-text-express-v1";

/// Titan Text Lite model identifier.
pub const TITAN_TEXT_LITE: &str = "amazon.titan-text-lite-v1";

/// Where and how to reach the Bedrock runtime.
///
/// Credentials are resolved by the AWS SDK's default chain, optionally
/// narrowed to a named profile.
///
/// # Examples
///
/// ```
/// use relay_models::{BedrockConfig, TITAN_TEXT_LITE};
///
/// let config = BedrockConfig::builder()
///     .model_id(TITAN_TEXT_LITE)
///     .profile("dev")
///     .build()
///     .unwrap();
/// assert_eq!(config.region(), "us-east-1");
/// assert_eq!(config.model_id(), TITAN_TEXT_LITE);
/// assert_eq!(config.profile().as_deref(), Some("dev"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters, Builder)]
#[builder(setter(into), default)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct BedrockConfig {
    /// AWS region hosting the model
    region: String,
    /// Model identifier passed to `InvokeModel`
    model_id: String,
    /// Named profile from the shared AWS config files
    #[builder(setter(strip_option))]
    profile: Option<String>,
    /// Endpoint override, for VPC endpoints or local stubs
    #[builder(setter(strip_option))]
    endpoint_url: Option<String>,
}

impl BedrockConfig {
    /// Returns a builder for constructing a BedrockConfig.
    pub fn builder() -> BedrockConfigBuilder {
        BedrockConfigBuilder::default()
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            model_id: TITAN_TEXT_EXPRESS.to_string(),
            profile: None,
            endpoint_url: None,
        }
    }
}
