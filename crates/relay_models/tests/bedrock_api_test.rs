//! Live tests against Amazon Bedrock.
//!
//! These tests need AWS credentials with access to the Titan text models in
//! us-east-1 (environment variables, `.env`, or a shared profile).
//!
//! Run with: cargo test --package relay_models --features api -- --ignored

#![cfg(all(feature = "bedrock", feature = "api"))]

use relay_core::GenerateRequest;
use relay_interface::TextGenerator;
use relay_models::{BedrockClient, BedrockConfig, TITAN_TEXT_LITE};
use relay_retry::{BoundedRetryInvoker, RetryPolicy};

#[tokio::test]
#[ignore] // Requires AWS credentials
async fn test_bedrock_lite_single_attempt() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = BedrockConfig::builder().model_id(TITAN_TEXT_LITE).build()?;
    let client = BedrockClient::from_config(&config).await;

    let response = client.generate(&GenerateRequest::new("Who are you?")).await?;

    assert!(response.first_text().is_some());
    println!("Response: {:?}", response.first_text());
    Ok(())
}

#[tokio::test]
#[ignore] // Requires AWS credentials
async fn test_bedrock_express_with_retry() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = BedrockClient::from_config(&BedrockConfig::default()).await;
    let invoker = BoundedRetryInvoker::new(client, RetryPolicy::default());

    let text = invoker
        .invoke(&GenerateRequest::new("What is generative ai?"))
        .await?;

    assert!(!text.is_empty());
    println!("Response: {}", text);
    Ok(())
}
