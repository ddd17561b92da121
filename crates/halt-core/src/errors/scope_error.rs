//! Errors from the scoped current-cancellation registry.

/// Usage errors around the thread-scoped cancellation slot.
///
/// These signal a programming mistake, not a cancellation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("No cancellation found in the current thread")]
    NoCurrent,
}
