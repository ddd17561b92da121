//! # halt-core
//!
//! Cooperative cancellation primitives: a small composable token that
//! lets independent units of work observe, at any point, whether they
//! should stop — because a controller signalled cancellation, because a
//! deadline elapsed, or because either of two such conditions occurred.
//!
//! Cancellation here is advisory. Nothing interrupts blocked work; the
//! cancellable work polls [`Cancellation::is_cancelled`] (branching
//! style) or [`Cancellation::check`] (error style) at its own cadence
//! and decides to stop.
//!
//! ```
//! use std::time::Duration;
//! use halt_core::Cancellation;
//!
//! let (cancellation, control) = Cancellation::signal();
//! let cancellation = cancellation.with_timeout(Duration::from_secs(10));
//!
//! assert!(!cancellation.is_cancelled());
//! control.cancel();
//! assert!(cancellation.is_cancelled());
//! assert!(cancellation.check().is_err());
//! ```

pub mod cancellation;
pub mod clock;
pub mod errors;
pub mod flag;
pub mod scope;

pub use cancellation::{Cancellation, Control, Deadline, Either, Signal, EXPIRES_AFTER_MAX};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use errors::{CancelError, ScopeError};
pub use flag::AtomicFlag;
