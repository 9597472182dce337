//! Relay: send prompts to hosted text models with bounded retries.
//!
//! The facade wires [`BedrockClient`] to a [`BoundedRetryInvoker`] using a
//! layered [`RelayConfig`]. Most callers only need [`generate_text`].
//!
//! ```no_run
//! # async fn demo() -> relay::RelayResult<()> {
//! let config = relay::RelayConfig::load(None)?;
//! let text = relay::generate_text(&config, "What is generative ai?").await?;
//! println!("Response: {text}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod generate;

pub use config::{ENV_PREFIX, RelayConfig, RetrySettings};
pub use generate::{generate_text, generate_text_blocking, generate_with};

pub use relay_core::{
    GenerateRequest, GenerateResponse, GenerationConfig, LogFormat, init_tracing,
};
pub use relay_error::{
    ConfigError, ConfigErrorKind, InvocationError, InvocationErrorKind, ProviderError,
    ProviderErrorKind, RelayError, RelayErrorKind, RelayResult, RetryableError,
};
pub use relay_interface::{AttemptOutcome, TextGenerator};
pub use relay_models::{BedrockClient, BedrockConfig, TITAN_TEXT_EXPRESS, TITAN_TEXT_LITE};
pub use relay_retry::{BoundedRetryInvoker, CancellationToken, InvocationReport, RetryPolicy};
