//! Tests for cancelling an invocation during backoff.

mod test_utils;

use relay_error::InvocationErrorKind;
use relay_retry::{BoundedRetryInvoker, CancellationToken, RetryPolicy};
use std::time::Duration;
use test_utils::{MockBehavior, ScriptedGenerator, create_test_request};
use tokio::time::{Instant, sleep};

#[tokio::test(start_paused = true)]
async fn test_cancel_during_backoff_stops_retrying() {
    let generator = ScriptedGenerator::always(MockBehavior::Unavailable);
    let invoker = BoundedRetryInvoker::new(
        generator.clone(),
        RetryPolicy::new(5, Duration::from_secs(2)).unwrap(),
    );
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        sleep(Duration::from_secs(3)).await;
        canceller.cancel();
    });

    let start = Instant::now();
    let err = invoker
        .invoke_cancellable(&create_test_request("ping"), &token)
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), InvocationErrorKind::Cancelled { attempts: 2 });
    assert_eq!(generator.attempts(), 2);
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_token_still_allows_first_attempt() {
    let generator = ScriptedGenerator::always(MockBehavior::Succeed(vec!["done"]));
    let invoker = BoundedRetryInvoker::new(generator.clone(), RetryPolicy::default());
    let token = CancellationToken::new();
    token.cancel();

    let text = invoker
        .invoke_cancellable(&create_test_request("ping"), &token)
        .await
        .unwrap();

    assert_eq!(text, "done");
    assert_eq!(generator.attempts(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_token_skips_backoff() {
    let generator = ScriptedGenerator::always(MockBehavior::Unavailable);
    let invoker = BoundedRetryInvoker::new(generator.clone(), RetryPolicy::default());
    let token = CancellationToken::new();
    token.cancel();

    let start = Instant::now();
    let err = invoker
        .invoke_cancellable(&create_test_request("ping"), &token)
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), InvocationErrorKind::Cancelled { attempts: 1 });
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_uncancelled_token_behaves_like_invoke() {
    let generator = ScriptedGenerator::scripted(
        vec![MockBehavior::Unavailable, MockBehavior::Unavailable],
        MockBehavior::Succeed(vec!["third time"]),
    );
    let invoker = BoundedRetryInvoker::new(
        generator.clone(),
        RetryPolicy::new(5, Duration::from_secs(2)).unwrap(),
    );
    let token = CancellationToken::new();

    let start = Instant::now();
    let text = invoker
        .invoke_cancellable(&create_test_request("ping"), &token)
        .await
        .unwrap();

    assert_eq!(text, "third time");
    assert_eq!(start.elapsed(), Duration::from_secs(6));
}
