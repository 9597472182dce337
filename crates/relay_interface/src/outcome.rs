//! Tagged result of a single provider attempt.

use relay_core::GenerateResponse;
use relay_error::{ProviderError, RetryableError};

/// What one attempt produced, as seen by the retry loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Provider returned a response.
    Success(GenerateResponse),
    /// Provider is temporarily unavailable; the attempt may be repeated.
    TransientFailure(ProviderError),
    /// Provider rejected the request; repeating it will not help.
    PermanentFailure(ProviderError),
}

impl AttemptOutcome {
    /// Returns true for a transient failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, AttemptOutcome::TransientFailure(_))
    }
}

impl From<Result<GenerateResponse, ProviderError>> for AttemptOutcome {
    fn from(result: Result<GenerateResponse, ProviderError>) -> Self {
        match result {
            Ok(response) => AttemptOutcome::Success(response),
            Err(err) if err.is_retryable() => AttemptOutcome::TransientFailure(err),
            Err(err) => AttemptOutcome::PermanentFailure(err),
        }
    }
}
