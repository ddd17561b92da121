//! Parallel map where the first failure cancels the remaining work.
//!
//! Items are mapped on the rayon pool. Every task checks the shared
//! cancellation before doing its work; a task that fails fires the
//! control, so items scheduled after the failure settle as cancelled
//! instead of running.
//!
//! Run with: `cargo run --example parallel_map`

use std::time::Duration;

use rayon::prelude::*;

use halt_core::{CancelError, Cancellation, Control};

#[derive(Debug)]
enum Outcome {
    Resolved(u32),
    Rejected(String),
    Cancelled(CancelError),
}

/// Map `items` in parallel, cancelling the remainder on first failure.
fn map<F>(items: &[u32], cancellation: &Cancellation, control: &Control, work: F) -> Vec<Outcome>
where
    F: Fn(u32) -> Result<u32, String> + Sync,
{
    items
        .par_iter()
        .map(|&item| {
            if let Err(err) = cancellation.check() {
                return Outcome::Cancelled(err);
            }
            match work(item) {
                Ok(value) => Outcome::Resolved(value),
                Err(err) => {
                    control.cancel();
                    Outcome::Rejected(err)
                }
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let items: Vec<u32> = (1..=10).collect();

    // Every item succeeds: nothing fires the control.
    let (cancellation, control) = Cancellation::signal();
    for outcome in map(&items, &cancellation, &control, Ok) {
        tracing::info!(?outcome, "success run");
    }

    // Items above 3 fail after some work; the first failure cancels
    // whatever has not started yet.
    let (cancellation, control) = Cancellation::signal();
    let outcomes = map(&items, &cancellation, &control, |item| {
        std::thread::sleep(Duration::from_millis(100));
        if item > 3 {
            Err(format!("boom on {item}"))
        } else {
            Ok(item)
        }
    });

    let cancelled = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Cancelled(_)))
        .count();
    for outcome in &outcomes {
        tracing::info!(?outcome, "failure run");
    }
    tracing::info!(cancelled, "items skipped after the first failure");
}
