//! Retry classification shared by provider errors.

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use relay_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let busy = ProviderError::new(ProviderErrorKind::ServiceUnavailable(
///     "Service unavailable".to_string(),
/// ));
/// assert!(busy.is_retryable());
///
/// let denied = ProviderError::new(ProviderErrorKind::AccessDenied(
///     "not authorised".to_string(),
/// ));
/// assert!(!denied.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// A temporarily unavailable service should return true. Malformed
    /// requests, authorisation failures and quota errors should return false.
    fn is_retryable(&self) -> bool;
}
