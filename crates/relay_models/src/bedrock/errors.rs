//! Classification of Bedrock SDK failures.

use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use relay_error::{ProviderError, ProviderErrorKind};

/// Picks the error kind for a modeled `InvokeModel` service error.
///
/// Only `ServiceUnavailableException` maps to the transient kind.
pub(crate) fn service_error_kind(err: &InvokeModelError) -> fn(String) -> ProviderErrorKind {
    match err {
        InvokeModelError::ServiceUnavailableException(_) => ProviderErrorKind::ServiceUnavailable,
        InvokeModelError::ValidationException(_) => ProviderErrorKind::Validation,
        InvokeModelError::AccessDeniedException(_) => ProviderErrorKind::AccessDenied,
        InvokeModelError::ThrottlingException(_) => ProviderErrorKind::Throttled,
        InvokeModelError::ServiceQuotaExceededException(_) => ProviderErrorKind::QuotaExceeded,
        InvokeModelError::ResourceNotFoundException(_) => ProviderErrorKind::ModelNotFound,
        InvokeModelError::ModelNotReadyException(_) => ProviderErrorKind::ModelNotReady,
        InvokeModelError::ModelTimeoutException(_) => ProviderErrorKind::ModelTimeout,
        InvokeModelError::ModelErrorException(_) => ProviderErrorKind::ModelFailure,
        InvokeModelError::InternalServerException(_) => ProviderErrorKind::Internal,
        _ => ProviderErrorKind::Unclassified,
    }
}

/// Converts an SDK failure into a classified provider error.
///
/// Failures that never produced a service response (dispatch, timeout,
/// unparseable response) are reported as transport errors.
#[track_caller]
pub(crate) fn classify_sdk_error<R>(err: SdkError<InvokeModelError, R>) -> ProviderError
where
    R: std::fmt::Debug,
{
    let kind: fn(String) -> ProviderErrorKind = match err.as_service_error() {
        Some(service_error) => service_error_kind(service_error),
        None => ProviderErrorKind::Transport,
    };
    let message = DisplayErrorContext(err).to_string();
    ProviderError::new(kind(message))
}
