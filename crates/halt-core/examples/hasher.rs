//! Lazy iterator pipeline bounded by a deadline.
//!
//! A tick source feeds a chunk generator feeding an xxh3 hasher, all as
//! iterator adaptors on one thread. The chain checks the cancellation
//! between elements and stops once the two-second deadline expires,
//! folding the digests it managed to produce.
//!
//! Run with: `cargo run --example hasher`

use std::time::Duration;

use xxhash_rust::xxh3::xxh3_64;

use halt_core::Cancellation;

/// Deterministic xorshift64 chunk generator.
fn chunk(seed: u64) -> Vec<u8> {
    let mut state = if seed == 0 { 1 } else { seed };
    let mut out = Vec::with_capacity(1024);
    while out.len() < 1024 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        out.extend_from_slice(&state.to_le_bytes());
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cancellation = Cancellation::deadline(Duration::from_secs(2));

    let ticker = {
        let cancellation = cancellation.clone();
        (0u64..).take_while(move |_| !cancellation.is_cancelled())
    };

    let reader = {
        let cancellation = cancellation.clone();
        ticker.map(move |tick| {
            cancellation.check().map(|()| {
                std::thread::sleep(Duration::from_millis(50));
                (tick, chunk(tick + 1))
            })
        })
    };

    let hashed = reader.map(|item| {
        item.map(|(tick, data)| {
            let digest = xxh3_64(&data);
            tracing::debug!(tick, digest = %format_args!("{digest:016x}"), "hashed");
            digest
        })
    });

    // Fold what the budget allowed; the first check failure ends the run.
    let mut combined = 0u64;
    let mut produced = 0usize;
    for item in hashed {
        match item {
            Ok(digest) => {
                combined ^= digest;
                produced += 1;
            }
            Err(err) => {
                tracing::info!(%err, "pipeline interrupted");
                break;
            }
        }
    }

    tracing::info!(
        produced,
        combined = %format_args!("{combined:016x}"),
        "finished"
    );
}
