//! Tests for request and response types.

use relay_core::{Candidate, GenerateRequest, GenerateResponse, GenerationConfig};

#[test]
fn test_request_builder_defaults_generation() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerateRequest::builder().prompt("What is generative ai?").build()?;

    assert_eq!(request.prompt(), "What is generative ai?");
    assert_eq!(*request.generation(), GenerationConfig::default());
    Ok(())
}

#[test]
fn test_generation_config_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let generation = GenerationConfig::builder()
        .max_token_count(64)
        .temperature(0.2)
        .stop_sequences(vec!["User:".to_string()])
        .build()?;

    assert_eq!(*generation.max_token_count(), 64);
    assert_eq!(*generation.temperature(), 0.2);
    assert_eq!(*generation.top_p(), 1.0);
    assert_eq!(generation.stop_sequences(), &vec!["User:".to_string()]);
    Ok(())
}

#[test]
fn test_request_requires_prompt() {
    assert!(GenerateRequest::builder().build().is_err());
}

#[test]
fn test_first_text_ignores_later_candidates() {
    let response = GenerateResponse::new(vec![
        Candidate::new("authoritative"),
        Candidate::new("ignored"),
    ]);

    assert_eq!(response.first_text(), Some("authoritative"));
    assert_eq!(response.into_first_text(), Some("authoritative".to_string()));
}

#[test]
fn test_empty_response_has_no_text() {
    let response = GenerateResponse::new(Vec::new());
    assert_eq!(response.first_text(), None);
}
