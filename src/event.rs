//! Axis events: one interval endpoint of one box on one axis.
//!
//! An event is the index of the referenced scalar in the flat box slice,
//! `box_id * 4 + field`, where `field` is 0/2 for min/max x and 1/3 for
//! min/max y. Each box owns exactly two events per axis.

use std::cmp::Ordering;

use crate::coord::Coordinate;
use crate::error::{Result, SweepError};

/// Largest number of boxes the `u32` event encoding can address.
pub const MAX_BOXES: usize = (u32::MAX / 4) as usize;

/// Field offset that separates a max event from a min event.
const MAX_FIELD: u32 = 2;

/// One of the two sweep axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Axis {
    /// Horizontal axis, fields 0 and 2 of a box.
    X,
    /// Vertical axis, fields 1 and 3 of a box.
    Y,
}

impl Axis {
    /// Both axes in sweep order.
    pub const BOTH: [Self; 2] = [Self::X, Self::Y];

    /// Offset of this axis's min field within a box.
    #[inline]
    pub fn offset(self) -> u32 {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.offset() as usize
    }
}

/// Box that owns `event`.
#[inline]
pub fn box_id(event: u32) -> u32 {
    event / 4
}

/// Whether `event` is the min endpoint of its box.
#[inline]
pub fn is_min(event: u32) -> bool {
    event & MAX_FIELD == 0
}

/// Number of boxes in a flat coordinate slice.
pub(crate) fn box_count<T>(boxes: &[T]) -> Result<u32> {
    let len = boxes.len();
    if !len.is_multiple_of(4) || len / 4 > MAX_BOXES {
        return Err(SweepError::InvalidCount { len });
    }
    u32::try_from(len / 4).map_err(|_| SweepError::InvalidCount { len })
}

/// Fills `events` with the natural, unsorted order of `axis`:
/// min then max of box 0, min then max of box 1, and so on.
pub(crate) fn populate(events: &mut Vec<u32>, axis: Axis, count: u32) -> Result<()> {
    events.clear();
    events.try_reserve(count as usize * 2)?;
    let offset = axis.offset();
    for i in 0..count {
        events.push(i * 4 + offset);
        events.push(i * 4 + offset + MAX_FIELD);
    }
    Ok(())
}

/// Event order: coordinate ascending, then min before max, then encoding.
///
/// Opening every box before closing any at the same coordinate makes
/// touching edges count as overlapping.
#[inline]
pub fn cmp_events<T: Coordinate>(boxes: &[T], a: u32, b: u32) -> Ordering {
    boxes[a as usize]
        .cmp_coord(&boxes[b as usize])
        .then_with(|| (a & MAX_FIELD).cmp(&(b & MAX_FIELD)))
        .then_with(|| a.cmp(&b))
}
