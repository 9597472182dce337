//! CLI argument definitions.

use crate::RelayConfig;
use clap::Parser;
use std::path::PathBuf;

/// Prompt used when none is given on the command line.
pub const DEFAULT_PROMPT: &str = "What is generative ai?";

/// Send a prompt to a Bedrock text model, retrying while the service is unavailable.
#[derive(Parser, Debug, Clone)]
#[command(name = "relay")]
#[command(version)]
pub struct Cli {
    /// Prompt text to send
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long)]
    pub model: Option<String>,

    /// AWS region
    #[arg(long)]
    pub region: Option<String>,

    /// Named AWS profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Override the Bedrock runtime endpoint
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Maximum tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Nucleus sampling probability mass
    #[arg(long)]
    pub top_p: Option<f32>,

    /// Total attempts, including the first
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Backoff unit in milliseconds
    #[arg(long)]
    pub base_delay_ms: Option<u64>,

    /// Make a single attempt with no retries
    #[arg(long, conflicts_with = "max_attempts")]
    pub no_retry: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Layers command-line flags over loaded configuration.
    pub fn apply_overrides(&self, config: RelayConfig) -> RelayConfig {
        let RelayConfig {
            mut bedrock,
            mut generation,
            mut retry,
        } = config;

        if let Some(model) = &self.model {
            bedrock = bedrock.with_model_id(model.clone());
        }
        if let Some(region) = &self.region {
            bedrock = bedrock.with_region(region.clone());
        }
        if let Some(profile) = &self.profile {
            bedrock = bedrock.with_profile(Some(profile.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            bedrock = bedrock.with_endpoint_url(Some(endpoint_url.clone()));
        }

        if let Some(max_tokens) = self.max_tokens {
            generation = generation.with_max_token_count(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            generation = generation.with_temperature(temperature);
        }
        if let Some(top_p) = self.top_p {
            generation = generation.with_top_p(top_p);
        }

        if let Some(max_attempts) = self.max_attempts {
            retry.max_attempts = max_attempts;
        }
        if self.no_retry {
            retry.max_attempts = 1;
        }
        if let Some(base_delay_ms) = self.base_delay_ms {
            retry.base_delay_ms = base_delay_ms;
        }

        RelayConfig {
            bedrock,
            generation,
            retry,
        }
    }
}
