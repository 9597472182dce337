//! The one-operation provider capability.

use async_trait::async_trait;
use relay_core::{GenerateRequest, GenerateResponse};
use relay_error::ProviderError;
use std::sync::Arc;

/// A remote text generation service.
///
/// Implementations send exactly one request per call and classify any
/// failure into a [`ProviderError`]. Authentication, endpoint resolution
/// and transport belong to the implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one request and return the provider's response.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ProviderError>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model_id(&self) -> &str;
}

#[async_trait]
impl<T> TextGenerator for Arc<T>
where
    T: TextGenerator + ?Sized,
{
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}
