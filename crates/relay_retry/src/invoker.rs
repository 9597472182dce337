//! Bounded retry invoker for a single remote generation call.

use crate::RetryPolicy;
use derive_getters::Getters;
use relay_core::GenerateRequest;
use relay_error::{
    InvocationError, InvocationErrorKind, InvocationResult, ProviderError, ProviderErrorKind,
};
use relay_interface::{AttemptOutcome, TextGenerator};
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Summary of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct InvocationReport {
    /// Text of the first candidate
    text: String,
    /// Attempts made, including the successful one
    attempts: u32,
    /// Total time spent in backoff waits
    total_backoff: Duration,
}

impl InvocationReport {
    /// Consumes the report, returning the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Wraps a [`TextGenerator`] with bounded exponential-backoff retries.
///
/// Only transient failures are retried. Permanent failures propagate on the
/// attempt that produced them, and running out of attempts is reported as
/// [`InvocationErrorKind::Exhausted`]. The attempt counter lives on the
/// stack of each call, so one invoker may serve concurrent callers.
#[derive(Debug, Clone)]
pub struct BoundedRetryInvoker<G> {
    generator: G,
    policy: RetryPolicy,
}

impl<G> BoundedRetryInvoker<G>
where
    G: TextGenerator,
{
    /// Creates an invoker over `generator`.
    pub fn new(generator: G, policy: RetryPolicy) -> Self {
        Self { generator, policy }
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generate text, retrying transient failures.
    ///
    /// # Errors
    ///
    /// Returns `Permanent` for a non-retryable provider error and `Exhausted`
    /// once every attempt has failed transiently.
    pub async fn invoke(&self, request: &GenerateRequest) -> InvocationResult<String> {
        self.run(request, None).await.map(InvocationReport::into_text)
    }

    /// As [`invoke`](Self::invoke), also reporting attempts and backoff time.
    pub async fn invoke_with_report(
        &self,
        request: &GenerateRequest,
    ) -> InvocationResult<InvocationReport> {
        self.run(request, None).await
    }

    /// As [`invoke`](Self::invoke), but backoff waits end early when `cancel` fires.
    ///
    /// An attempt already in flight runs to completion; cancellation is only
    /// observed between attempts.
    pub async fn invoke_cancellable(
        &self,
        request: &GenerateRequest,
        cancel: &CancellationToken,
    ) -> InvocationResult<String> {
        self.run(request, Some(cancel))
            .await
            .map(InvocationReport::into_text)
    }

    #[instrument(
        skip_all,
        fields(
            provider = self.generator.provider_name(),
            model = self.generator.model_id(),
            max_attempts = *self.policy.max_attempts(),
        )
    )]
    async fn run(
        &self,
        request: &GenerateRequest,
        cancel: Option<&CancellationToken>,
    ) -> InvocationResult<InvocationReport> {
        let max_attempts = *self.policy.max_attempts();
        let mut attempt: u32 = 0;
        let mut total_backoff = Duration::ZERO;

        loop {
            let attempts = attempt + 1;
            debug!(attempt = attempts, "Invoking model");

            match AttemptOutcome::from(self.generator.generate(request).await) {
                AttemptOutcome::Success(response) => {
                    let text = response.into_first_text().ok_or_else(|| {
                        InvocationError::new(InvocationErrorKind::Permanent(ProviderError::new(
                            ProviderErrorKind::EmptyResults,
                        )))
                    })?;
                    if attempts > 1 {
                        info!(attempts, ?total_backoff, "Invocation succeeded after retry");
                    }
                    return Ok(InvocationReport {
                        text,
                        attempts,
                        total_backoff,
                    });
                }
                AttemptOutcome::PermanentFailure(err) => {
                    warn!(attempt = attempts, error = %err.kind, "Error is not retryable, failing immediately");
                    return Err(InvocationError::new(InvocationErrorKind::Permanent(err)));
                }
                AttemptOutcome::TransientFailure(err) => {
                    if attempts >= max_attempts {
                        warn!(attempts, error = %err.kind, "All retry attempts exhausted");
                        return Err(InvocationError::new(InvocationErrorKind::Exhausted {
                            attempts,
                            last: err,
                        }));
                    }

                    let wait = self.policy.delay_for(attempt);
                    warn!(
                        attempt = attempts,
                        wait_secs = wait.as_secs_f64(),
                        "Service unavailable, retrying"
                    );

                    match cancel {
                        Some(token) => {
                            tokio::select! {
                                biased;
                                _ = token.cancelled() => {
                                    info!(attempts, "Invocation cancelled during backoff");
                                    return Err(InvocationError::new(
                                        InvocationErrorKind::Cancelled { attempts },
                                    ));
                                }
                                _ = sleep(wait) => {}
                            }
                        }
                        None => sleep(wait).await,
                    }

                    total_backoff = total_backoff.saturating_add(wait);
                    attempt = attempts;
                }
            }
        }
    }
}
