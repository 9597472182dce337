//! Core data types for the Relay text generation client.
//!
//! This crate provides the request and response types shared by the
//! provider drivers, the retry invoker and the facade.

mod observability;
mod output;
mod request;

pub use observability::{LogFormat, init_tracing};
pub use output::{Candidate, CandidateBuilder, GenerateResponse, GenerateResponseBuilder};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerationConfig, GenerationConfigBuilder,
};
