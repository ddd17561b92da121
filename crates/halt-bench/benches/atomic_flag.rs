//! Atomic flag vs mutex-guarded boolean, uncontended and contended.
//!
//! Each iteration toggles the flag through its CAS: read the value,
//! swap in the inverse. The contended variants run the same loop from
//! 2 and 4 threads against one shared flag.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use halt_bench::fixtures::MutexFlag;
use halt_core::AtomicFlag;

const ITERATIONS: usize = 10_000;

fn toggle_atomic(flag: &AtomicFlag, iterations: usize) {
    for _ in 0..iterations {
        let next = !flag.load();
        black_box(flag.compare_and_swap(!next, next));
    }
}

fn toggle_mutex(flag: &MutexFlag, iterations: usize) {
    for _ in 0..iterations {
        let next = !flag.load();
        black_box(flag.compare_and_swap(!next, next));
    }
}

fn contended_atomic(threads: usize) {
    let flag = Arc::new(AtomicFlag::new(false));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let flag = Arc::clone(&flag);
            std::thread::spawn(move || toggle_atomic(&flag, ITERATIONS))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

fn contended_mutex(threads: usize) {
    let flag = Arc::new(MutexFlag::new(false));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let flag = Arc::clone(&flag);
            std::thread::spawn(move || toggle_mutex(&flag, ITERATIONS))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

fn bench_flags(c: &mut Criterion) {
    let mut group = c.benchmark_group("flag_toggle");

    group.bench_function("atomic", |b| {
        let flag = AtomicFlag::new(false);
        b.iter(|| toggle_atomic(&flag, ITERATIONS));
    });

    group.bench_function("mutex", |b| {
        let flag = MutexFlag::new(false);
        b.iter(|| toggle_mutex(&flag, ITERATIONS));
    });

    for threads in [2, 4] {
        group.bench_function(format!("atomic_{threads}_threads"), |b| {
            b.iter(|| contended_atomic(threads));
        });
        group.bench_function(format!("mutex_{threads}_threads"), |b| {
            b.iter(|| contended_mutex(threads));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flags);
criterion_main!(benches);
