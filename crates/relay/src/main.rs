//! Relay CLI - send a prompt to Bedrock and print the response.

use clap::Parser;
use relay::cli::{Cli, run_prompt};
use relay::{LogFormat, RelayConfig, init_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(format, "relay=info").map_err(|e| e.to_string())?;

    let config = cli.apply_overrides(RelayConfig::load(cli.config.as_deref())?);
    info!(
        model = %config.bedrock.model_id(),
        region = %config.bedrock.region(),
        max_attempts = config.retry.max_attempts,
        "Starting Relay"
    );

    match run_prompt(&config, &cli.prompt).await {
        Ok(text) => {
            println!("Response: {text}");
            Ok(())
        }
        Err(e) if e.is_exhausted() => {
            error!(error = %e, "Retry budget exhausted");
            eprintln!("Max retries reached. Bedrock is still unavailable.");
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
