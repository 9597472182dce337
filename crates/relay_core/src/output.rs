//! Response types from text generation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One generated-text option returned for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
pub struct Candidate {
    /// Generated text
    #[builder(setter(into))]
    text: String,
    /// Tokens produced for this candidate, when reported
    #[builder(default)]
    token_count: Option<u32>,
    /// Why generation stopped, when reported
    #[builder(default)]
    completion_reason: Option<String>,
}

impl Candidate {
    /// Creates a candidate carrying only text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            token_count: None,
            completion_reason: None,
        }
    }

    /// Returns a builder for constructing a Candidate.
    pub fn builder() -> CandidateBuilder {
        CandidateBuilder::default()
    }
}

/// The unified response object.
///
/// Only the first candidate is authoritative output.
///
/// # Examples
///
/// ```
/// use relay_core::{Candidate, GenerateResponse};
///
/// let response = GenerateResponse::new(vec![Candidate::new("first"), Candidate::new("second")]);
/// assert_eq!(response.first_text(), Some("first"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
pub struct GenerateResponse {
    /// Generated candidates in provider order
    candidates: Vec<Candidate>,
    /// Tokens consumed by the prompt, when reported
    #[builder(default)]
    input_token_count: Option<u32>,
}

impl GenerateResponse {
    /// Creates a response from candidates.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            input_token_count: None,
        }
    }

    /// Returns a builder for constructing a GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Text of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(|candidate| candidate.text.as_str())
    }

    /// Consumes the response, returning the first candidate's text.
    pub fn into_first_text(self) -> Option<String> {
        self.candidates.into_iter().next().map(|candidate| candidate.text)
    }
}
