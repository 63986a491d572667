//! Error types for overlap detection and culling.

use std::collections::TryReserveError;

use crate::event::Axis;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors returned by [`SweepContext`](crate::SweepContext) operations.
///
/// None of these are transient: the operation is aborted, the collision list
/// is left empty and the context should be rebuilt with
/// [`refresh`](crate::SweepContext::refresh) before further use.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SweepError {
    /// The box slice does not describe a whole number of boxes, or holds more
    /// boxes than the event encoding can address.
    #[error("invalid box slice of length {len}: expected 4 coordinates per box and at most {max} boxes", max = crate::event::MAX_BOXES)]
    InvalidCount {
        /// Length of the offending slice.
        len: usize,
    },
    /// The caller broke a usage contract.
    #[error("contract violation: {0}")]
    ContractViolation(#[from] Violation),
    /// Growing an internal buffer failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// Ways a caller can misuse a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation {
    /// `update` was called with a different number of boxes than the last
    /// refresh.
    #[error("box count changed from {expected} to {actual}; refresh instead of update")]
    CountMismatch {
        /// Count seen by the last refresh.
        expected: usize,
        /// Count passed to update.
        actual: usize,
    },
    /// A max event was swept for a box that was never opened, which happens
    /// for inverted boxes (`min > max`) or NaN minimums.
    #[error("box {box_id} closed on axis {axis:?} before it was opened")]
    InactiveBox {
        /// Axis being swept.
        axis: Axis,
        /// Offending box.
        box_id: u32,
    },
}
