//! Error types for the Relay text generation client.
//!
//! Every error carries the source location where it was created, and the
//! provider error kinds decide which failures the retry loop may absorb.

mod config;
mod error;
mod invocation;
mod provider;
mod retryable;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{RelayError, RelayErrorKind, RelayResult};
pub use invocation::{InvocationError, InvocationErrorKind, InvocationResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use retryable::RetryableError;
