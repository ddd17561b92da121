//! Errors produced by `Cancellation::check`.

use std::time::Duration;

/// Failure reported by a cancellation's throwing check.
///
/// `Cancelled` is the base kind, raised when a manually-triggered
/// signal (or a combinator over one) has fired. `DeadlineExpired` is
/// the time-bounded specialization; its message carries the allotted
/// budget. Callers matching on this enum handle both exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CancelError {
    #[error("{reason}")]
    Cancelled { reason: String },

    #[error("Deadline expired after {:.2}s", .allotted.as_secs_f64())]
    DeadlineExpired { allotted: Duration },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_displays_reason_verbatim() {
        let err = CancelError::Cancelled {
            reason: "Execution cancelled by signal".into(),
        };
        assert_eq!(err.to_string(), "Execution cancelled by signal");
    }

    #[test]
    fn deadline_expired_displays_allotted_seconds() {
        let err = CancelError::DeadlineExpired {
            allotted: Duration::from_secs(2),
        };
        assert_eq!(err.to_string(), "Deadline expired after 2.00s");

        let err = CancelError::DeadlineExpired {
            allotted: Duration::from_millis(1500),
        };
        assert_eq!(err.to_string(), "Deadline expired after 1.50s");
    }
}
