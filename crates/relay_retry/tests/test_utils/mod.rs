//! Test utilities for retry tests.
//!
//! This module provides a scripted generator that plays back a fixed
//! sequence of outcomes and records when each attempt was made.

use async_trait::async_trait;
use relay_core::{Candidate, GenerateRequest, GenerateResponse};
use relay_error::{ProviderError, ProviderErrorKind};
use relay_interface::TextGenerator;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// What the scripted generator does on one call.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Return these candidate texts, in order
    Succeed(Vec<&'static str>),
    /// Fail with a transient service-unavailable error
    Unavailable,
    /// Fail with a permanent validation error
    Reject,
    /// Succeed with no candidates
    Empty,
}

/// Generator that replays a script, then repeats a fallback behavior.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    script: Arc<Mutex<VecDeque<MockBehavior>>>,
    fallback: MockBehavior,
    calls: Arc<Mutex<Vec<Instant>>>,
}

#[allow(dead_code)]
impl ScriptedGenerator {
    /// Plays `script` once, then `fallback` for every further call.
    pub fn scripted(script: Vec<MockBehavior>, fallback: MockBehavior) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            fallback,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Does the same thing on every call.
    pub fn always(behavior: MockBehavior) -> Self {
        Self::scripted(Vec::new(), behavior)
    }

    /// Number of calls made so far.
    pub fn attempts(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Gaps between consecutive calls.
    pub fn waits(&self) -> Vec<std::time::Duration> {
        let calls = self.calls.lock().unwrap();
        calls.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _request: &GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        self.calls.lock().unwrap().push(Instant::now());
        let behavior = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match behavior {
            MockBehavior::Succeed(texts) => Ok(GenerateResponse::new(
                texts.into_iter().map(Candidate::new).collect(),
            )),
            MockBehavior::Unavailable => Err(ProviderError::new(
                ProviderErrorKind::ServiceUnavailable("Service unavailable".to_string()),
            )),
            MockBehavior::Reject => Err(ProviderError::new(ProviderErrorKind::Validation(
                "Malformed input request".to_string(),
            ))),
            MockBehavior::Empty => Ok(GenerateResponse::new(Vec::new())),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }
}

/// Helper to create a test request.
pub fn create_test_request(prompt: &str) -> GenerateRequest {
    GenerateRequest::new(prompt)
}
