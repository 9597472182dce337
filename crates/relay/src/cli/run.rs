//! Prompt command handler.

use crate::RelayConfig;
use relay_core::GenerateRequest;
use relay_error::RelayResult;
use relay_models::BedrockClient;
use relay_retry::{BoundedRetryInvoker, CancellationToken};
use tracing::{info, warn};

/// Exit status after a second interrupt, matching the shell's SIGINT convention.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Sends one prompt through the bounded retry invoker.
///
/// The first Ctrl+C cancels the invocation at its next backoff wait. A second
/// Ctrl+C exits immediately, even while an attempt is in flight.
#[tracing::instrument(skip_all, fields(model = %config.bedrock.model_id()))]
pub async fn run_prompt(config: &RelayConfig, prompt: &str) -> RelayResult<String> {
    let policy = config.retry.to_policy()?;
    let client = BedrockClient::from_config(&config.bedrock).await;
    let invoker = BoundedRetryInvoker::new(client, policy);

    let request = GenerateRequest::new(prompt).with_generation(config.generation.clone());

    let cancel = CancellationToken::new();
    let listener = tokio::spawn(watch_interrupts(cancel.clone(), tokio::signal::ctrl_c));

    let result = invoker.invoke_cancellable(&request, &cancel).await;
    listener.abort();

    let text = result?;
    info!(chars = text.len(), "Prompt completed");
    Ok(text)
}

/// Listens for interrupts from `next_interrupt`.
///
/// The first interrupt cancels `cancel`; the second exits the process with
/// [`INTERRUPT_EXIT_CODE`]. If the signal source fails, nothing is cancelled.
pub async fn watch_interrupts<F, Fut>(cancel: CancellationToken, next_interrupt: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if await_second_interrupt(&cancel, next_interrupt).await {
        warn!("Second interrupt received, exiting");
        std::process::exit(INTERRUPT_EXIT_CODE);
    }
}

/// Cancels on the first interrupt and returns true once a second arrives.
///
/// Returns false if the signal source fails first.
pub async fn await_second_interrupt<F, Fut>(
    cancel: &CancellationToken,
    mut next_interrupt: F,
) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = next_interrupt().await {
        warn!(error = %e, "Could not listen for interrupts");
        return false;
    }
    warn!("Interrupt received, cancelling; press Ctrl+C again to exit");
    cancel.cancel();

    next_interrupt().await.is_ok()
}
