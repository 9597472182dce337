//! Bedrock runtime client implementing TextGenerator.

use crate::bedrock::{BedrockConfig, TitanResponse, conversions, errors};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, retry::RetryConfig};
use aws_sdk_bedrockruntime::{Client, primitives::Blob};
use relay_core::{GenerateRequest, GenerateResponse};
use relay_error::{ProviderError, ProviderErrorKind};
use relay_interface::TextGenerator;
use tracing::{debug, error, instrument, warn};

const PROVIDER_NAME: &str = "bedrock";

/// Bedrock runtime client bound to one model.
///
/// Each [`generate`](TextGenerator::generate) call sends exactly one
/// `InvokeModel` request.
#[derive(Debug, Clone)]
pub struct BedrockClient {
    client: Client,
    model_id: String,
}

impl BedrockClient {
    /// Creates a client from explicit configuration.
    ///
    /// Region, profile and endpoint come from `config`; credentials are
    /// resolved by the SDK's default provider chain.
    #[instrument(skip_all, fields(region = %config.region(), model = %config.model_id()))]
    pub async fn from_config(config: &BedrockConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region().clone()))
            .retry_config(RetryConfig::disabled());

        if let Some(profile) = config.profile() {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = config.endpoint_url() {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        debug!("Created Bedrock runtime client");

        Self::from_sdk_client(Client::new(&sdk_config), config.model_id().clone())
    }

    /// Wraps an already constructed SDK client.
    pub fn from_sdk_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for BedrockClient {
    #[instrument(skip(self, request), fields(provider = PROVIDER_NAME, model = %self.model_id))]
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        let titan_request = conversions::to_titan_request(request);
        let body = serde_json::to_vec(&titan_request).map_err(|e| {
            error!(error = ?e, "Failed to encode request");
            ProviderError::new(ProviderErrorKind::RequestEncoding(e.to_string()))
        })?;

        debug!(
            bytes = body.len(),
            max_token_count = titan_request.text_generation_config().max_token_count,
            "Sending InvokeModel request"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                let err = errors::classify_sdk_error(e);
                warn!(error = %err.kind, "InvokeModel failed");
                err
            })?;

        let titan_response: TitanResponse =
            serde_json::from_slice(output.body().as_ref()).map_err(|e| {
                error!(error = ?e, "Failed to parse response");
                ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                    "Failed to parse JSON: {}",
                    e
                )))
            })?;

        debug!(
            results = titan_response.results.len(),
            input_tokens = ?titan_response.input_text_token_count,
            "Received response"
        );

        conversions::from_titan_response(titan_response)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
