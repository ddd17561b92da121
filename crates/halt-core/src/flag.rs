//! Lock-free boolean flag backing manual cancellation.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean cell that can be read and updated atomically.
///
/// Backed by the platform's native atomic boolean, never a mutex. The
/// public surface is load-and-CAS only: once a flag owned by a control
/// has been set to `true` it can never revert, because no store or
/// reset operation exists.
///
/// Reads use acquire ordering, so every write that happened before the
/// flag's `true` transition is visible to any reader that observes
/// `true`. The compare-and-swap is sequentially consistent.
pub struct AtomicFlag {
    value: AtomicBool,
}

impl AtomicFlag {
    /// Create a new flag with the given initial value.
    pub const fn new(initial: bool) -> Self {
        Self {
            value: AtomicBool::new(initial),
        }
    }

    /// Atomically load the current value (acquire ordering).
    pub fn load(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    /// Atomically compare the current value with `expected` and, if they
    /// are equal, replace it with `desired`.
    ///
    /// Returns `true` when the swap happened. Under any number of
    /// concurrent callers exactly one `compare_and_swap(false, true)`
    /// on a fresh flag succeeds.
    pub fn compare_and_swap(&self, expected: bool, desired: bool) -> bool {
        self.value
            .compare_exchange(expected, desired, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

impl fmt::Debug for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomicFlag({})", self.value.load(Ordering::Relaxed))
    }
}

impl fmt::Display for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomicFlag({})", self.value.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_succeeds_once() {
        let flag = AtomicFlag::new(false);
        assert!(!flag.load());
        assert!(flag.compare_and_swap(false, true));
        assert!(flag.load());
        assert!(!flag.compare_and_swap(false, true));
        assert!(flag.load());
    }

    #[test]
    fn swap_leaves_value_on_mismatch() {
        let flag = AtomicFlag::new(false);
        assert!(!flag.compare_and_swap(true, false));
        assert!(!flag.load());
    }

    #[test]
    fn display_renders_value() {
        let flag = AtomicFlag::new(false);
        assert_eq!(flag.to_string(), "AtomicFlag(false)");
        flag.compare_and_swap(false, true);
        assert_eq!(flag.to_string(), "AtomicFlag(true)");
    }
}
