//! Single-axis sweep over sorted interval endpoints.

use crate::coord::Coordinate;
use crate::error::{Result, Violation};
use crate::event::{self, Axis};

/// Sorts an axis's events from scratch.
pub(crate) fn sort_events<T: Coordinate>(boxes: &[T], events: &mut [u32]) {
    // The event order is total, so stability is irrelevant.
    events.sort_unstable_by(|&a, &b| event::cmp_events(boxes, a, b));
}

/// Sweeps a sorted event order and appends every pair of boxes whose
/// intervals overlap on `axis` to `pairs`, canonicalized as `(low, high)`.
///
/// `active` is scratch storage; it is cleared on entry.
pub(crate) fn sweep_axis(
    axis: Axis,
    events: &[u32],
    active: &mut Vec<u32>,
    pairs: &mut Vec<(u32, u32)>,
) -> Result<()> {
    active.clear();
    pairs.clear();

    for &ev in events {
        let box_id = event::box_id(ev);
        if event::is_min(ev) {
            pairs.try_reserve(active.len())?;
            for &open in active.iter() {
                pairs.push((open.min(box_id), open.max(box_id)));
            }
            active.try_reserve(1)?;
            active.push(box_id);
        } else {
            remove_active(active, box_id).ok_or(Violation::InactiveBox { axis, box_id })?;
        }
    }

    Ok(())
}

/// Removes `box_id` from the active list, preserving the order of the rest.
///
/// Scans from the back since recently opened boxes tend to close first.
fn remove_active(active: &mut Vec<u32>, box_id: u32) -> Option<()> {
    let pos = active.iter().rposition(|&id| id == box_id)?;
    let removed = active.remove(pos);
    debug_assert_eq!(removed, box_id, "removed the wrong active box");
    Some(())
}
