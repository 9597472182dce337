//! Provider error types and retry classification.

use crate::RetryableError;

/// Failure conditions reported by a text generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Service is temporarily unable to handle the request
    #[display("Service unavailable: {_0}")]
    ServiceUnavailable(String),
    /// Request was rejected as malformed
    #[display("Invalid request: {_0}")]
    Validation(String),
    /// Caller is not authorised to invoke the model
    #[display("Access denied: {_0}")]
    AccessDenied(String),
    /// Request rate exceeded the account's allowance
    #[display("Throttled: {_0}")]
    Throttled(String),
    /// Service quota for the account is exhausted
    #[display("Service quota exceeded: {_0}")]
    QuotaExceeded(String),
    /// Model identifier does not resolve to a model
    #[display("Model not found: {_0}")]
    ModelNotFound(String),
    /// Model exists but is not ready to serve requests
    #[display("Model not ready: {_0}")]
    ModelNotReady(String),
    /// Model took too long to produce a response
    #[display("Model timed out: {_0}")]
    ModelTimeout(String),
    /// Model failed while processing the request
    #[display("Model error: {_0}")]
    ModelFailure(String),
    /// Provider reported an internal failure
    #[display("Internal service error: {_0}")]
    Internal(String),
    /// Request never reached the service or the connection failed
    #[display("Transport error: {_0}")]
    Transport(String),
    /// Request payload could not be encoded
    #[display("Request encoding failed: {_0}")]
    RequestEncoding(String),
    /// Response body could not be decoded
    #[display("Response parsing failed: {_0}")]
    ResponseParsing(String),
    /// Response decoded but held no generated candidates
    #[display("Response contained no results")]
    EmptyResults,
    /// Any rejection the provider did not classify
    #[display("Unclassified provider error: {_0}")]
    Unclassified(String),
}

impl ProviderErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Only a temporarily unavailable service is transient. Throttling and
    /// quota errors are treated as permanent rejections.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderErrorKind::ServiceUnavailable(_))
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use relay_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::ServiceUnavailable(
///     "try again later".to_string(),
/// ));
/// assert!(err.is_retryable());
/// assert!(format!("{}", err).contains("try again later"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl From<ProviderErrorKind> for ProviderError {
    #[track_caller]
    fn from(kind: ProviderErrorKind) -> Self {
        Self::new(kind)
    }
}
