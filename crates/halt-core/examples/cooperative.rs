//! Channel pipeline stopped cooperatively by signal or timeout.
//!
//! Three stages run in their own threads: a ticker producing sequence
//! numbers, a reader attaching a chunk of generated data to each tick,
//! and a hasher digesting the chunks. Every stage installs the shared
//! cancellation in its own thread scope and polls it between items.
//!
//! The pipeline stops after 10 seconds, or earlier when Enter is
//! pressed — the stdin thread plays the role a process signal handler
//! would play in a real application.
//!
//! Run with: `cargo run --example cooperative`

use std::io::BufRead;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use xxhash_rust::xxh3::xxh3_64;

use halt_core::{scope, Cancellation};

const CAPACITY: usize = 10;

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

/// Emit a sequence number roughly every 300 ms until cancelled.
fn ticker(cancellation: Cancellation, output: Sender<u64>) {
    scope::using(cancellation, || {
        let mut number = 0u64;
        loop {
            let current = scope::current().expect("scope installed above");
            if current.is_cancelled() {
                tracing::info!(reason = %current.reason(), "ticker interrupted");
                break;
            }
            if output.try_send(number).is_ok() {
                number += 1;
            }
            std::thread::sleep(Duration::from_millis(300));
        }
    });
}

/// Attach a generated chunk to each tick.
fn reader(cancellation: Cancellation, input: Receiver<u64>, output: Sender<(u64, Vec<u8>)>) {
    scope::using(cancellation, || loop {
        let current = scope::current().expect("scope installed above");
        if current.is_cancelled() {
            tracing::info!(reason = %current.reason(), "reader interrupted");
            break;
        }
        match input.recv_timeout(Duration::from_millis(100)) {
            Ok(tick) => {
                let data = chunk(tick + 1);
                std::thread::sleep(Duration::from_millis(200));
                if output.send((tick, data)).is_err() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    });
}

/// Digest each chunk with xxh3.
fn hasher(cancellation: Cancellation, input: Receiver<(u64, Vec<u8>)>, output: Sender<(u64, u64)>) {
    scope::using(cancellation, || loop {
        let current = scope::current().expect("scope installed above");
        if current.is_cancelled() {
            tracing::info!(reason = %current.reason(), "hasher interrupted");
            break;
        }
        match input.recv_timeout(Duration::from_millis(100)) {
            Ok((tick, data)) => {
                let digest = xxh3_64(&data);
                std::thread::sleep(Duration::from_millis(100));
                if output.send((tick, digest)).is_err() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    });
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let (signal, control) = Cancellation::signal();
    let cancellation = signal.with_timeout(Duration::from_secs(10));

    // Stand-in for a process signal handler: Enter fires the control.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_ok() {
            control.cancel();
        }
    });

    let (tick_tx, tick_rx) = bounded(CAPACITY);
    let (data_tx, data_rx) = bounded(CAPACITY);
    let (digest_tx, digest_rx) = bounded(CAPACITY);

    let stages = [
        std::thread::spawn({
            let cancellation = cancellation.clone();
            move || ticker(cancellation, tick_tx)
        }),
        std::thread::spawn({
            let cancellation = cancellation.clone();
            move || reader(cancellation, tick_rx, data_tx)
        }),
        std::thread::spawn({
            let cancellation = cancellation.clone();
            move || hasher(cancellation, data_rx, digest_tx)
        }),
    ];

    tracing::info!("pipeline running; press Enter to cancel, times out after 10s");

    for (tick, digest) in digest_rx {
        tracing::info!(tick, digest = %format_args!("{digest:016x}"), "hashed");
    }

    for stage in stages {
        stage.join().expect("pipeline stage panicked");
    }

    tracing::info!(reason = %cancellation.reason(), "pipeline stopped");
}
