//! Tests for halt-bench fixtures: the baseline obeys the flag contract.

use halt_bench::fixtures::MutexFlag;
use halt_core::AtomicFlag;

#[test]
fn mutex_flag_matches_the_atomic_contract() {
    let atomic = AtomicFlag::new(false);
    let mutex = MutexFlag::new(false);

    assert_eq!(atomic.load(), mutex.load());

    assert!(atomic.compare_and_swap(false, true));
    assert!(mutex.compare_and_swap(false, true));
    assert_eq!(atomic.load(), mutex.load());

    // Mismatched expectation swaps on neither.
    assert!(!atomic.compare_and_swap(false, true));
    assert!(!mutex.compare_and_swap(false, true));
    assert!(atomic.load());
    assert!(mutex.load());
}

#[test]
fn mutex_flag_toggle_round_trip() {
    let flag = MutexFlag::new(false);
    assert!(flag.compare_and_swap(false, true));
    assert!(flag.compare_and_swap(true, false));
    assert!(!flag.load());
}
