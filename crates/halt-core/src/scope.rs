//! Thread-scoped "current cancellation" propagation.
//!
//! Each thread owns one slot holding at most one active cancellation.
//! [`using`] installs a cancellation for the duration of a closure with
//! stack discipline: entering saves the previous value, exiting —
//! normally or by panic — restores it. The slot is thread-confined;
//! explicit context-passing remains the preferred style, this exists
//! for call chains where threading a parameter through is impractical.

use std::cell::RefCell;

use crate::cancellation::Cancellation;
use crate::errors::ScopeError;

thread_local! {
    static CURRENT: RefCell<Option<Cancellation>> = const { RefCell::new(None) };
}

/// Restores the saved slot value when the scope exits, on every exit
/// path including unwind.
struct Restore(Option<Cancellation>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Install `cancellation` as the calling thread's current cancellation
/// for the duration of `body`.
///
/// Nesting is legal and behaves as a stack: the inner scope shadows the
/// outer one and the outer value is visible again once the inner scope
/// exits.
pub fn using<F, R>(cancellation: Cancellation, body: F) -> R
where
    F: FnOnce() -> R,
{
    tracing::trace!("entering cancellation scope");
    let previous = CURRENT.with(|slot| slot.borrow_mut().replace(cancellation));
    let _restore = Restore(previous);
    body()
}

/// The cancellation currently installed for the calling thread.
///
/// Fails with [`ScopeError::NoCurrent`] when no scope is active — a
/// usage error, not a cancellation event.
pub fn current() -> Result<Cancellation, ScopeError> {
    CURRENT
        .with(|slot| slot.borrow().clone())
        .ok_or(ScopeError::NoCurrent)
}

/// Whether a cancellation is installed for the calling thread.
pub fn current_exists() -> bool {
    CURRENT.with(|slot| slot.borrow().is_some())
}
