//! Cancellation variants and combinators.
//!
//! A [`Cancellation`] is a read-only, composable view answering "should
//! this work stop now?". The closed set of variants — manual signal,
//! monotonic deadline, OR-combination — sits behind one enum so every
//! operation is handled exhaustively.

pub mod deadline;
pub mod either;
pub mod signal;

pub use deadline::Deadline;
pub use either::Either;
pub use signal::{Control, Signal};

use std::ops::BitOr;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};
use crate::errors::CancelError;

/// Budget reported by cancellations with no time bound: one year.
///
/// A conventional "far longer than any realistic operation" sentinel,
/// never actually enforced as a timeout.
pub const EXPIRES_AFTER_MAX: Duration = Duration::from_secs(365 * 24 * 3600);

/// A composable cancellation condition.
///
/// Workers poll [`is_cancelled`](Cancellation::is_cancelled) or
/// [`check`](Cancellation::check) on whatever cancellation they were
/// handed; a controller (or the clock) eventually flips the underlying
/// state, which propagates instantly to every composite built from it.
/// Cancellation is cooperative: nothing forcibly interrupts blocked
/// work, and polling cadence is the caller's responsibility.
///
/// Clones are cheap and observe the same underlying flag or clock.
#[derive(Debug, Clone)]
pub enum Cancellation {
    /// Fired manually through a [`Control`].
    Signal(Signal),
    /// Fired by elapsed monotonic time.
    Deadline(Deadline),
    /// Fired when either child fires.
    Either(Either),
}

impl Cancellation {
    /// Create a manual cancellation and the control that fires it.
    ///
    /// The pair shares one atomic flag; the control is the only writer.
    pub fn signal() -> (Cancellation, Control) {
        let (signal, control) = Signal::pair();
        (Cancellation::Signal(signal), control)
    }

    /// Create a cancellation that expires `allotted` from now, measured
    /// on the platform's monotonic clock.
    pub fn deadline(allotted: Duration) -> Cancellation {
        Self::deadline_with_clock(allotted, Arc::new(MonotonicClock))
    }

    /// Create a deadline against an injected clock.
    pub fn deadline_with_clock(allotted: Duration, clock: Arc<dyn Clock>) -> Cancellation {
        Cancellation::Deadline(Deadline::new(allotted, clock))
    }

    /// Whether the cancellation condition currently holds.
    ///
    /// Pure query: never fails, never blocks, safe to call from any
    /// thread at any frequency.
    pub fn is_cancelled(&self) -> bool {
        match self {
            Cancellation::Signal(signal) => signal.is_cancelled(),
            Cancellation::Deadline(deadline) => deadline.is_cancelled(),
            Cancellation::Either(either) => either.is_cancelled(),
        }
    }

    /// The throwing counterpart of [`is_cancelled`](Self::is_cancelled).
    ///
    /// Returns `Ok(())` while the condition does not hold; fails with
    /// the variant's [`CancelError`] once it does. Errors always
    /// surface to the immediate caller, never swallowed or retried.
    pub fn check(&self) -> Result<(), CancelError> {
        match self {
            Cancellation::Signal(signal) => signal.check(),
            Cancellation::Deadline(deadline) => deadline.check(),
            Cancellation::Either(either) => either.check(),
        }
    }

    /// Remaining time budget.
    ///
    /// [`EXPIRES_AFTER_MAX`] for variants with no time bound; for
    /// combinators, the minimum over both children.
    pub fn expires_after(&self) -> Duration {
        match self {
            Cancellation::Signal(_) => EXPIRES_AFTER_MAX,
            Cancellation::Deadline(deadline) => deadline.expires_after(),
            Cancellation::Either(either) => either.expires_after(),
        }
    }

    /// Why this cancellation fires (or would fire).
    pub fn reason(&self) -> String {
        match self {
            Cancellation::Signal(signal) => signal.reason().to_string(),
            Cancellation::Deadline(deadline) => deadline.reason(),
            Cancellation::Either(either) => either.reason(),
        }
    }

    /// Combine with another cancellation; the result fires when either
    /// does. `self` becomes the left operand and is consulted first.
    pub fn or_else(self, other: Cancellation) -> Cancellation {
        Cancellation::Either(Either::new(self, other))
    }

    /// Combine with a fresh deadline of `allotted` on the monotonic
    /// clock. Sugar for `self.or_else(Cancellation::deadline(allotted))`.
    pub fn with_timeout(self, allotted: Duration) -> Cancellation {
        let deadline = Self::deadline(allotted);
        self.or_else(deadline)
    }
}

impl BitOr for Cancellation {
    type Output = Cancellation;

    /// `a | b` is `a.or_else(b)`.
    fn bitor(self, rhs: Cancellation) -> Cancellation {
        self.or_else(rhs)
    }
}
