//! Re-sorting of event orders between frames.
//!
//! After small motion an axis's previous order is nearly sorted, so an
//! insertion sort moves each endpoint only a few slots and runs in close to
//! linear time. When no endpoint moves at all, the sweep for that axis can be
//! skipped: the candidate pairs depend only on the order.

use std::cmp::Ordering;

use crate::coord::Coordinate;
use crate::event;

/// Insertion-sorts `events` against the current coordinates.
///
/// Returns `true` if any adjacent swap was needed.
pub(crate) fn resort_events<T: Coordinate>(boxes: &[T], events: &mut [u32]) -> bool {
    let mut swapped = false;
    for i in 1..events.len() {
        let mut j = i;
        while j > 0 && event::cmp_events(boxes, events[j - 1], events[j]) == Ordering::Greater {
            events.swap(j - 1, j);
            j -= 1;
            swapped = true;
        }
    }
    swapped
}
