//! # halt-bench
//!
//! Benchmarks for the Halt cancellation primitives.
//!
//! The core question the suite answers: what does the native-atomic
//! flag buy over a mutex-guarded boolean, uncontended and under
//! multi-thread contention? The mutex variant lives in
//! [`fixtures::MutexFlag`] purely as the comparison baseline — it is
//! the portability shim the library itself never uses.

pub mod fixtures;
