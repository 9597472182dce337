//! Type conversions between Relay and Titan formats.

use crate::bedrock::{TitanRequest, TitanResponse, TitanTextGenerationConfig};
use relay_core::{Candidate, GenerateRequest, GenerateResponse};
use relay_error::{ProviderError, ProviderErrorKind};

/// Converts a Relay GenerateRequest to Titan's request body.
pub fn to_titan_request(req: &GenerateRequest) -> TitanRequest {
    let generation = req.generation();
    TitanRequest {
        input_text: req.prompt().clone(),
        text_generation_config: TitanTextGenerationConfig {
            max_token_count: *generation.max_token_count(),
            temperature: *generation.temperature(),
            top_p: *generation.top_p(),
            stop_sequences: generation.stop_sequences().clone(),
        },
    }
}

/// Converts a Titan response body to a Relay GenerateResponse.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::EmptyResults`] when `results` is empty.
pub fn from_titan_response(response: TitanResponse) -> Result<GenerateResponse, ProviderError> {
    if response.results.is_empty() {
        return Err(ProviderError::new(ProviderErrorKind::EmptyResults));
    }

    let candidates = response
        .results
        .into_iter()
        .map(|result| {
            Candidate::builder()
                .text(result.output_text)
                .token_count(result.token_count)
                .completion_reason(result.completion_reason)
                .build()
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "Failed to build candidate: {}",
                e
            )))
        })?;

    GenerateResponse::builder()
        .candidates(candidates)
        .input_token_count(response.input_text_token_count)
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "Failed to build response: {}",
                e
            )))
        })
}
