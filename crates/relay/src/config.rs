//! Layered configuration for the facade and CLI.

use relay_core::GenerationConfig;
use relay_error::{ConfigError, ConfigErrorKind};
use relay_models::BedrockConfig;
use relay_retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "RELAY";

/// Retry settings as they appear in configuration sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Backoff unit in milliseconds
    pub base_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 2000,
        }
    }
}

impl RetrySettings {
    /// Validates the settings into a retry policy.
    pub fn to_policy(&self) -> Result<RetryPolicy, ConfigError> {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.base_delay_ms)).map_err(
            |e| {
                ConfigError::new(ConfigErrorKind::Invalid {
                    field: "retry".to_string(),
                    reason: e.kind().to_string(),
                })
            },
        )
    }
}

/// Top-level configuration.
///
/// Sources are layered in order: built-in defaults, an optional TOML file,
/// then environment variables such as `RELAY__RETRY__MAX_ATTEMPTS` or
/// `RELAY__BEDROCK__MODEL_ID`.
///
/// ```toml
/// [bedrock]
/// region = "us-east-1"
/// model_id = "amazon.titan-text-express-v1"
///
/// [generation]
/// max_token_count = 200
/// temperature = 0.7
/// top_p = 1.0
///
/// [retry]
/// max_attempts = 5
/// base_delay_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Bedrock endpoint and model
    pub bedrock: BedrockConfig,
    /// Sampling parameters
    pub generation: GenerationConfig,
    /// Retry budget
    pub retry: RetrySettings,
}

impl RelayConfig {
    /// Load configuration from defaults, an optional file, and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if a value
    /// cannot be deserialized into its field.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_sources(path, None)
    }

    /// As [`load`](Self::load), reading `RELAY__*` overrides from `vars`
    /// instead of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        vars: config::Map<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::load_sources(path, Some(vars))
    }

    #[instrument(skip_all, fields(path = ?path))]
    fn load_sources(
        path: Option<&Path>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(vars),
        );

        let config: Self = builder
            .build()
            .and_then(|sources| sources.try_deserialize())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;

        debug!(
            region = %config.bedrock.region(),
            model = %config.bedrock.model_id(),
            max_attempts = config.retry.max_attempts,
            "Configuration loaded"
        );
        Ok(config)
    }
}
