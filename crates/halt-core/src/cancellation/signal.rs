//! Manual cancellation: a one-shot control and its read-only view.

use std::sync::Arc;

use crate::errors::CancelError;
use crate::flag::AtomicFlag;

/// Reason reported by every signal-backed cancellation.
pub(crate) const SIGNAL_REASON: &str = "Execution cancelled by signal";

/// Read-only view over a control's flag.
///
/// Becomes cancelled when the paired [`Control`] fires. Clones share
/// the same flag, so any clone observes the trigger on its next poll.
#[derive(Debug, Clone)]
pub struct Signal {
    flag: Arc<AtomicFlag>,
}

impl Signal {
    /// Create a signal/control pair over a fresh flag.
    pub(crate) fn pair() -> (Signal, Control) {
        let flag = Arc::new(AtomicFlag::new(false));
        let signal = Signal {
            flag: Arc::clone(&flag),
        };
        (signal, Control { flag })
    }

    /// Whether the paired control has fired.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load()
    }

    /// Fail with [`CancelError::Cancelled`] once the control has fired.
    pub fn check(&self) -> Result<(), CancelError> {
        if self.is_cancelled() {
            return Err(CancelError::Cancelled {
                reason: SIGNAL_REASON.to_string(),
            });
        }
        Ok(())
    }

    /// The constant reason this cancellation reports when fired.
    pub fn reason(&self) -> &'static str {
        SIGNAL_REASON
    }
}

/// Write-side handle that flips the shared flag exactly once.
///
/// Safe to call from any number of threads or from a process signal
/// handler; the CAS arbitrates a single winner. There is no callback
/// mechanism — holders of the [`Signal`] observe the trigger on their
/// next poll.
#[derive(Debug, Clone)]
pub struct Control {
    flag: Arc<AtomicFlag>,
}

impl Control {
    /// Fire the cancellation.
    ///
    /// Returns `true` for the first successful call and `false` for
    /// every subsequent call, from any thread.
    pub fn cancel(&self) -> bool {
        let fired = self.flag.compare_and_swap(false, true);
        if fired {
            tracing::debug!("cancellation signal fired");
        }
        fired
    }

    /// Whether this control has already fired.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load()
    }
}
