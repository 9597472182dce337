//! Bounded retry with exponential backoff.
//!
//! [`BoundedRetryInvoker`] wraps one [`TextGenerator`](relay_interface::TextGenerator)
//! call. A transient failure is retried after `base_delay * 2^attempt` until
//! the [`RetryPolicy`] budget runs out; anything else is returned at once.
//!
//! ```no_run
//! # async fn demo<G: relay_interface::TextGenerator>(generator: G) -> Result<(), relay_error::InvocationError> {
//! use relay_core::GenerateRequest;
//! use relay_retry::{BoundedRetryInvoker, RetryPolicy};
//!
//! let invoker = BoundedRetryInvoker::new(generator, RetryPolicy::default());
//! let text = invoker.invoke(&GenerateRequest::new("What is generative ai?")).await?;
//! println!("Response: {text}");
//! # Ok(())
//! # }
//! ```

mod invoker;
mod policy;

pub use invoker::{BoundedRetryInvoker, InvocationReport};
pub use policy::RetryPolicy;
pub use tokio_util::sync::CancellationToken;
