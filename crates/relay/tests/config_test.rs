//! Tests for layered configuration loading.

use relay::{ConfigErrorKind, RelayConfig, RetrySettings, TITAN_TEXT_EXPRESS, TITAN_TEXT_LITE};
use std::error::Error;
use std::io::Write;
use std::time::Duration;

fn write_toml(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_defaults_without_sources() -> Result<(), Box<dyn Error>> {
    let config = RelayConfig::load_with_env(None, config::Map::new())?;

    assert_eq!(config.bedrock.region(), "us-east-1");
    assert_eq!(config.bedrock.model_id(), TITAN_TEXT_EXPRESS);
    assert_eq!(*config.generation.max_token_count(), 200);
    assert_eq!(*config.generation.temperature(), 0.7);
    assert_eq!(*config.generation.top_p(), 1.0);
    assert_eq!(config.retry, RetrySettings::default());

    let policy = config.retry.to_policy()?;
    assert_eq!(*policy.max_attempts(), 5);
    assert_eq!(*policy.base_delay(), Duration::from_secs(2));
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> Result<(), Box<dyn Error>> {
    let file = write_toml(&format!(
        r#"
[bedrock]
region = "eu-central-1"
model_id = "{TITAN_TEXT_LITE}"
profile = "dev"

[generation]
max_token_count = 512
temperature = 0.5

[retry]
max_attempts = 3
base_delay_ms = 250
"#
    ))?;

    let config = RelayConfig::load_with_env(Some(file.path()), config::Map::new())?;

    assert_eq!(config.bedrock.region(), "eu-central-1");
    assert_eq!(config.bedrock.model_id(), TITAN_TEXT_LITE);
    assert_eq!(config.bedrock.profile().as_deref(), Some("dev"));
    assert_eq!(*config.bedrock.endpoint_url(), None);
    assert_eq!(*config.generation.max_token_count(), 512);
    assert_eq!(*config.generation.temperature(), 0.5);
    // Unset keys keep their defaults
    assert_eq!(*config.generation.top_p(), 1.0);

    let policy = config.retry.to_policy()?;
    assert_eq!(*policy.max_attempts(), 3);
    assert_eq!(*policy.base_delay(), Duration::from_millis(250));
    Ok(())
}

#[test]
fn test_missing_file_is_load_error() {
    let err = RelayConfig::load_with_env(
        Some(std::path::Path::new("/nonexistent/relay.toml")),
        config::Map::new(),
    )
        .expect_err("missing file should fail");
    assert!(matches!(err.kind(), ConfigErrorKind::Load(_)));
}

#[test]
fn test_malformed_value_is_load_error() -> Result<(), Box<dyn Error>> {
    let file = write_toml("[retry]\nmax_attempts = \"many\"\n")?;

    let err = RelayConfig::load_with_env(Some(file.path()), config::Map::new())
        .expect_err("bad type should fail");
    assert!(matches!(err.kind(), ConfigErrorKind::Load(_)));
    Ok(())
}

#[test]
fn test_zero_attempts_rejected() {
    let settings = RetrySettings {
        max_attempts: 0,
        base_delay_ms: 2000,
    };

    let err = settings.to_policy().expect_err("zero attempts should fail");
    assert!(matches!(
        err.kind(),
        ConfigErrorKind::Invalid { field, .. } if field == "retry"
    ));
}

#[test]
fn test_zero_delay_rejected() {
    let settings = RetrySettings {
        max_attempts: 5,
        base_delay_ms: 0,
    };

    assert!(settings.to_policy().is_err());
}

#[test]
fn test_environment_layer_overrides_file() -> Result<(), Box<dyn Error>> {
    let file = write_toml("[retry]\nmax_attempts = 3\nbase_delay_ms = 100\n")?;
    let mut vars = config::Map::new();
    vars.insert("RELAY__RETRY__MAX_ATTEMPTS".to_string(), "7".to_string());
    vars.insert("RELAY__BEDROCK__MODEL_ID".to_string(), TITAN_TEXT_LITE.to_string());
    vars.insert("UNRELATED".to_string(), "ignored".to_string());

    let config = RelayConfig::load_with_env(Some(file.path()), vars)?;

    assert_eq!(config.retry.max_attempts, 7);
    assert_eq!(config.retry.base_delay_ms, 100);
    assert_eq!(config.bedrock.model_id(), TITAN_TEXT_LITE);
    assert_eq!(config.bedrock.region(), "us-east-1");
    Ok(())
}
