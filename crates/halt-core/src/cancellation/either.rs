//! OR-combination of two cancellations.

use std::sync::Arc;
use std::time::Duration;

use crate::errors::CancelError;

use super::Cancellation;

/// A cancellation that fires when either of its children fires.
///
/// Children may themselves be `Either` nodes, forming a binary tree.
/// Every query walks the tree fresh — nothing is memoized — so a node
/// always reflects the live state of every leaf.
///
/// The left operand is always consulted first: `is_cancelled`
/// short-circuits left to right, `check` propagates the left child's
/// failure first, and `reason` composes left then right.
#[derive(Debug, Clone)]
pub struct Either {
    left: Arc<Cancellation>,
    right: Arc<Cancellation>,
}

impl Either {
    pub(crate) fn new(left: Cancellation, right: Cancellation) -> Self {
        Self {
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    /// The left child.
    pub fn left(&self) -> &Cancellation {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &Cancellation {
        &self.right
    }

    /// Whether either child is cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.left.is_cancelled() || self.right.is_cancelled()
    }

    /// Check both children, left first, re-raising the first failure
    /// verbatim.
    pub fn check(&self) -> Result<(), CancelError> {
        self.left.check()?;
        self.right.check()
    }

    /// The combined budget is bounded by whichever child expires
    /// soonest.
    pub fn expires_after(&self) -> Duration {
        self.left.expires_after().min(self.right.expires_after())
    }

    /// A single reason when both children agree, otherwise a composed
    /// description of both.
    pub fn reason(&self) -> String {
        let left = self.left.reason();
        let right = self.right.reason();
        if left == right {
            left
        } else {
            format!("Either of [{left}] or [{right}]")
        }
    }
}
