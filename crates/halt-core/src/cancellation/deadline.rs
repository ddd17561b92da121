//! Time-bounded cancellation derived from a monotonic clock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::errors::CancelError;

/// A cancellation that expires once its allotted time has elapsed.
///
/// The expiry instant is computed once at construction; after that the
/// deadline is stateless — cancellation is a pure function of the
/// clock, never stored as a flag. No timer thread is involved.
#[derive(Debug, Clone)]
pub struct Deadline {
    expires_at: Instant,
    allotted: Duration,
    clock: Arc<dyn Clock>,
}

impl Deadline {
    pub(crate) fn new(allotted: Duration, clock: Arc<dyn Clock>) -> Self {
        let expires_at = clock.now() + allotted;
        tracing::trace!(allotted_secs = allotted.as_secs_f64(), "deadline armed");
        Self {
            expires_at,
            allotted,
            clock,
        }
    }

    /// Whether the expiry instant has been reached. Inclusive: the
    /// deadline is cancelled exactly at `start + allotted`.
    pub fn is_cancelled(&self) -> bool {
        self.clock.now() >= self.expires_at
    }

    /// Fail with [`CancelError::DeadlineExpired`] once expired.
    pub fn check(&self) -> Result<(), CancelError> {
        if self.is_cancelled() {
            return Err(CancelError::DeadlineExpired {
                allotted: self.allotted,
            });
        }
        Ok(())
    }

    /// Remaining budget. Monotonically decreasing, floors at zero, so
    /// repeated calls after expiry keep returning zero.
    pub fn expires_after(&self) -> Duration {
        self.expires_at.saturating_duration_since(self.clock.now())
    }

    /// The reason this deadline reports when it fires.
    pub fn reason(&self) -> String {
        CancelError::DeadlineExpired {
            allotted: self.allotted,
        }
        .to_string()
    }

    /// The budget this deadline was constructed with.
    pub fn allotted(&self) -> Duration {
        self.allotted
    }
}
