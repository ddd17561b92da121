//! Error handling for Halt.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod cancel_error;
pub mod scope_error;

pub use cancel_error::CancelError;
pub use scope_error::ScopeError;
