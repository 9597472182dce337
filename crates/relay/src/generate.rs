//! Caller-facing text generation.

use crate::RelayConfig;
use relay_core::{GenerateRequest, GenerationConfig};
use relay_error::{ConfigError, ConfigErrorKind, RelayError, RelayErrorKind, RelayResult};
use relay_interface::TextGenerator;
use relay_models::BedrockClient;
use relay_retry::{BoundedRetryInvoker, RetryPolicy};
use tracing::instrument;

/// Generate text for `prompt` using the configured Bedrock model.
///
/// # Errors
///
/// Returns an error if the retry settings are invalid, the provider rejects
/// the request, or every attempt fails transiently.
#[instrument(skip_all, fields(model = %config.bedrock.model_id()))]
pub async fn generate_text(config: &RelayConfig, prompt: impl Into<String>) -> RelayResult<String> {
    let policy = config.retry.to_policy()?;
    let client = BedrockClient::from_config(&config.bedrock).await;
    generate_with(client, policy, config.generation.clone(), prompt).await
}

/// Generate text through any generator with an explicit policy.
pub async fn generate_with<G>(
    generator: G,
    policy: RetryPolicy,
    generation: GenerationConfig,
    prompt: impl Into<String>,
) -> RelayResult<String>
where
    G: TextGenerator,
{
    let request = GenerateRequest::builder()
        .prompt(prompt)
        .generation(generation)
        .build()
        .map_err(|e| {
            ConfigError::new(ConfigErrorKind::Invalid {
                field: "request".to_string(),
                reason: e.to_string(),
            })
        })?;

    let invoker = BoundedRetryInvoker::new(generator, policy);
    Ok(invoker.invoke(&request).await?)
}

/// Blocking form of [`generate_text`] for synchronous callers.
///
/// Runs on a private current-thread runtime, so it must not be called from
/// inside an async context.
pub fn generate_text_blocking(
    config: &RelayConfig,
    prompt: impl Into<String>,
) -> RelayResult<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RelayError::new(RelayErrorKind::Runtime(e.to_string())))?;
    runtime.block_on(generate_text(config, prompt))
}
