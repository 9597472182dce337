//! Error types for bounded retry invocations.

use crate::ProviderError;

/// Terminal outcomes of an invocation that did not produce text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvocationErrorKind {
    /// Provider rejected the request with a non-retryable error.
    #[display("Permanent failure: {_0}")]
    Permanent(ProviderError),
    /// Every attempt failed with a transient error.
    #[display("Retries exhausted after {attempts} attempts: {last}")]
    Exhausted {
        /// Number of attempts made
        attempts: u32,
        /// The transient error from the final attempt
        last: ProviderError,
    },
    /// Caller cancelled the invocation during a backoff wait.
    #[display("Invocation cancelled after {attempts} attempts")]
    Cancelled {
        /// Number of attempts made before cancellation
        attempts: u32,
    },
    /// Retry policy parameters are out of range.
    #[display("Invalid retry policy: {_0}")]
    InvalidPolicy(String),
}

/// Invocation error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invocation Error: {} at line {} in {}", kind, line, file)]
pub struct InvocationError {
    /// The specific error kind.
    pub kind: InvocationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl InvocationError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvocationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InvocationErrorKind {
        &self.kind
    }

    /// Returns true if the invocation ran out of attempts.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, InvocationErrorKind::Exhausted { .. })
    }
}

/// Result type for invocations.
pub type InvocationResult<T> = Result<T, InvocationError>;
