//! Retry policy and exponential backoff schedule.

use derive_getters::Getters;
use relay_error::{InvocationError, InvocationErrorKind, InvocationResult};
use std::time::Duration;

/// Attempt budget and backoff unit for one invocation.
///
/// The wait before retry `n` (zero-indexed) is `base_delay * 2^n`. No wait
/// follows the final attempt.
///
/// # Examples
///
/// ```
/// use relay_retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(5, Duration::from_secs(2)).unwrap();
/// assert_eq!(
///     policy.backoff_schedule().collect::<Vec<_>>(),
///     vec![
///         Duration::from_secs(2),
///         Duration::from_secs(4),
///         Duration::from_secs(8),
///         Duration::from_secs(16),
///     ]
/// );
/// assert_eq!(policy.total_backoff(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    max_attempts: u32,
    /// Backoff unit
    base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy, rejecting a zero attempt budget or a zero delay.
    pub fn new(max_attempts: u32, base_delay: Duration) -> InvocationResult<Self> {
        if max_attempts == 0 {
            return Err(InvocationError::new(InvocationErrorKind::InvalidPolicy(
                "max_attempts must be at least 1".to_string(),
            )));
        }
        if base_delay.is_zero() {
            return Err(InvocationError::new(InvocationErrorKind::InvalidPolicy(
                "base_delay must be positive".to_string(),
            )));
        }
        Ok(Self {
            max_attempts,
            base_delay,
        })
    }

    /// A policy that makes exactly one attempt.
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Wait before retry `attempt` (zero-indexed), saturating at `Duration::MAX`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        2u32.checked_pow(attempt)
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }

    /// Every wait a fully exhausted invocation sleeps through, in order.
    pub fn backoff_schedule(&self) -> impl ExactSizeIterator<Item = Duration> + '_ {
        (0..self.max_attempts - 1).map(|attempt| self.delay_for(attempt))
    }

    /// Sum of the backoff schedule, saturating at `Duration::MAX`.
    ///
    /// Stops at the first overflow, so huge attempt budgets stay cheap.
    pub fn total_backoff(&self) -> Duration {
        self.backoff_schedule()
            .try_fold(Duration::ZERO, Duration::checked_add)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(2),
        }
    }
}
