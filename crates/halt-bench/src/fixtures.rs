//! Shared fixtures for the flag benchmarks.

use std::sync::Mutex;

/// Mutex-guarded boolean exposing the same load/CAS contract as
/// `halt_core::AtomicFlag`.
///
/// Benchmark baseline only. The library never takes this path; it
/// exists to measure what the lock-free flag buys.
pub struct MutexFlag {
    value: Mutex<bool>,
}

impl MutexFlag {
    pub fn new(initial: bool) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }

    pub fn load(&self) -> bool {
        *self.value.lock().unwrap()
    }

    pub fn compare_and_swap(&self, expected: bool, desired: bool) -> bool {
        let mut value = self.value.lock().unwrap();
        if *value == expected {
            *value = desired;
            true
        } else {
            false
        }
    }
}
