//! Overlap context: per-run state of the sweep and its incremental refresh.

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::coord::Coordinate;
use crate::cull;
use crate::error::{Result, Violation};
use crate::event::{self, Axis};
use crate::incremental;
use crate::intersect;
use crate::sweep;

/// Sweep-and-prune state for one array of boxes.
///
/// Boxes are passed as a flat slice of `[min_x, min_y, max_x, max_y]`
/// tuples; box `i` starts at offset `4 * i`. The context never stores the
/// slice itself. It keeps the sorted endpoint order of each axis so that
/// [`update`](Self::update) can exploit frame-to-frame coherence when the
/// same boxes move by small amounts.
///
/// # Example
/// ```
/// use sprune::SweepContext;
///
/// let mut boxes = vec![
///     0.0, 0.0, 2.0, 2.0, // box 0
///     1.0, 1.0, 3.0, 3.0, // box 1
///     5.0, 5.0, 6.0, 6.0, // box 2
/// ];
/// let mut ctx = SweepContext::overlap(&boxes, None).unwrap();
/// assert_eq!(ctx.collision_pairs(), &[(0, 1)]);
///
/// // Move box 2 onto box 1.
/// boxes[8..12].copy_from_slice(&[2.5, 2.5, 3.5, 3.5]);
/// assert!(ctx.update(&boxes).unwrap());
/// assert_eq!(ctx.collision_pairs(), &[(0, 1), (1, 2)]);
///
/// assert_eq!(ctx.cull().unwrap(), &[1]);
/// ```
#[derive(Clone, Debug)]
pub struct SweepContext<T: Coordinate> {
    /// Number of boxes seen by the last refresh
    count: u32,
    /// Sorted event order per axis, kept between calls
    events: [Vec<u32>; 2],
    /// Open boxes during a sweep
    active: Vec<u32>,
    /// Sorted candidate pairs per axis
    axis_pairs: [Vec<(u32, u32)>; 2],
    /// Pairs overlapping on both axes, ascending
    collision_pairs: Vec<(u32, u32)>,
    /// Previous collision pairs while an update decides whether they changed
    scratch_pairs: Vec<(u32, u32)>,
    /// Boxes to hide, filled by `cull`
    culled: Vec<u32>,
    /// `culled` in ascending order, for membership tests
    culled_sorted: Vec<u32>,
    /// Whether `culled` reflects the current collision pairs
    culled_valid: bool,
    _coord: PhantomData<T>,
}

impl<T: Coordinate> SweepContext<T> {
    /// Creates an empty context with no boxes.
    pub fn new() -> Self {
        Self {
            count: 0,
            events: [Vec::new(), Vec::new()],
            active: Vec::new(),
            axis_pairs: [Vec::new(), Vec::new()],
            collision_pairs: Vec::new(),
            scratch_pairs: Vec::new(),
            culled: Vec::new(),
            culled_sorted: Vec::new(),
            culled_valid: true,
            _coord: PhantomData,
        }
    }

    /// Creates an empty context with room for `boxes` boxes.
    ///
    /// The capacity is a hint: if it cannot be reserved the context starts
    /// empty and grows on the first refresh.
    pub fn with_capacity(boxes: usize) -> Self {
        let mut ctx = Self::new();
        if let Some(events) = boxes.checked_mul(2) {
            for axis_events in &mut ctx.events {
                if axis_events.try_reserve_exact(events).is_err() {
                    break;
                }
            }
        }
        ctx
    }

    /// Computes all overlapping pairs of `boxes`.
    ///
    /// If `previous` is given its buffers are reused instead of allocating new
    /// ones; the result is the same as for a fresh context.
    ///
    /// # Errors
    ///
    /// Fails like [`refresh`](Self::refresh).
    pub fn overlap(boxes: &[T], previous: Option<Self>) -> Result<Self> {
        let mut ctx = previous.unwrap_or_default();
        ctx.refresh(boxes)?;
        Ok(ctx)
    }

    /// Recomputes every overlapping pair of `boxes` from scratch.
    ///
    /// The box count may differ from the previous call. Any culling result is
    /// discarded.
    ///
    /// # Errors
    ///
    /// - [`InvalidCount`](crate::SweepError::InvalidCount) if `boxes` is not a
    ///   whole number of boxes or holds more than [`MAX_BOXES`](crate::MAX_BOXES).
    /// - [`Violation::InactiveBox`] if a box has `min > max` or a NaN minimum.
    /// - [`AllocationFailure`](crate::SweepError::AllocationFailure) if a buffer
    ///   cannot grow.
    ///
    /// On error the context is left empty.
    pub fn refresh(&mut self, boxes: &[T]) -> Result<()> {
        self.clear();
        let result = self.rebuild(boxes);
        if result.is_err() {
            self.clear();
        }
        result
    }

    fn rebuild(&mut self, boxes: &[T]) -> Result<()> {
        let count = event::box_count(boxes)?;

        for axis in Axis::BOTH {
            let events = &mut self.events[axis.index()];
            event::populate(events, axis, count)?;
            sweep::sort_events(boxes, events);
        }
        self.count = count;

        for axis in Axis::BOTH {
            self.sweep(axis)?;
        }
        self.intersect()?;
        self.culled_valid = false;

        debug!(
            boxes = count,
            x_candidates = self.axis_pairs[0].len(),
            y_candidates = self.axis_pairs[1].len(),
            collisions = self.collision_pairs.len(),
            "sweep refreshed"
        );
        Ok(())
    }

    /// Re-reads `boxes` after they moved in place and refreshes the collision
    /// pairs, starting from the previous endpoint order.
    ///
    /// Returns whether the set of collision pairs changed. If no endpoint
    /// changed position on either axis, no sweep work is done at all.
    ///
    /// # Errors
    ///
    /// - [`Violation::CountMismatch`] if `boxes` holds a different number of
    ///   boxes than the last refresh; call [`refresh`](Self::refresh) instead.
    /// - Any error of [`refresh`](Self::refresh) for the re-swept axes.
    ///
    /// Errors after the count check leave the context empty.
    pub fn update(&mut self, boxes: &[T]) -> Result<bool> {
        let count = event::box_count(boxes)?;
        if count != self.count {
            return Err(Violation::CountMismatch {
                expected: self.count as usize,
                actual: count as usize,
            }
            .into());
        }

        let mut moved = [false; 2];
        for axis in Axis::BOTH {
            moved[axis.index()] = incremental::resort_events(boxes, &mut self.events[axis.index()]);
        }
        if moved == [false; 2] {
            trace!(boxes = count, "endpoint order unchanged, skipping sweep");
            return Ok(false);
        }

        for axis in Axis::BOTH {
            if moved[axis.index()]
                && let Err(err) = self.sweep(axis)
            {
                self.clear();
                return Err(err);
            }
        }

        std::mem::swap(&mut self.collision_pairs, &mut self.scratch_pairs);
        if let Err(err) = self.intersect() {
            self.clear();
            return Err(err);
        }
        let changed = self.collision_pairs != self.scratch_pairs;
        if changed {
            self.culled.clear();
            self.culled_sorted.clear();
            self.culled_valid = false;
        }

        debug!(
            boxes = count,
            x_moved = moved[0],
            y_moved = moved[1],
            collisions = self.collision_pairs.len(),
            changed,
            "sweep updated"
        );
        Ok(changed)
    }

    /// Selects boxes to hide so that no two remaining boxes overlap, and
    /// returns them.
    ///
    /// Calling this again without an intervening change returns the same set.
    ///
    /// # Errors
    ///
    /// [`SweepError::AllocationFailure`](crate::SweepError::AllocationFailure)
    /// if the collision graph cannot be built. The culled set is left empty.
    pub fn cull(&mut self) -> Result<&[u32]> {
        if !self.culled_valid {
            let result = cull::cull_pairs(&self.collision_pairs, &mut self.culled)
                .and_then(|components| {
                    self.culled_sorted.clear();
                    self.culled_sorted.try_reserve(self.culled.len())?;
                    self.culled_sorted.extend_from_slice(&self.culled);
                    self.culled_sorted.sort_unstable();
                    Ok(components)
                });
            let components = match result {
                Ok(components) => components,
                Err(err) => {
                    self.culled.clear();
                    self.culled_sorted.clear();
                    return Err(err);
                }
            };
            self.culled_valid = true;
            debug!(
                collisions = self.collision_pairs.len(),
                components,
                culled = self.culled.len(),
                "culled overlapping boxes"
            );
        }
        Ok(&self.culled)
    }

    /// Drops all results and endpoint orders, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.count = 0;
        for axis in Axis::BOTH {
            self.events[axis.index()].clear();
            self.axis_pairs[axis.index()].clear();
        }
        self.active.clear();
        self.collision_pairs.clear();
        self.scratch_pairs.clear();
        self.culled.clear();
        self.culled_sorted.clear();
        self.culled_valid = true;
    }

    /// Pairs `(a, b)` with `a < b` whose boxes overlap, ascending.
    #[inline]
    pub fn collision_pairs(&self) -> &[(u32, u32)] {
        &self.collision_pairs
    }

    /// Number of collision pairs.
    #[inline]
    pub fn num_collision_pairs(&self) -> usize {
        self.collision_pairs.len()
    }

    /// Boxes selected by the last [`cull`](Self::cull), in selection order.
    ///
    /// Empty if the collision pairs changed since.
    #[inline]
    pub fn culled(&self) -> &[u32] {
        &self.culled
    }

    /// Number of boxes selected by the last cull.
    #[inline]
    pub fn num_culled(&self) -> usize {
        self.culled.len()
    }

    /// Whether `box_id` was selected by the last cull.
    pub fn is_culled(&self, box_id: u32) -> bool {
        self.culled_sorted.binary_search(&box_id).is_ok()
    }

    /// Ids of the boxes left after removing the culled ones, ascending.
    pub fn visible(&self) -> impl Iterator<Item = u32> + '_ {
        let hidden = &self.culled_sorted;
        (0..self.count).filter(move |id| hidden.binary_search(id).is_err())
    }

    /// Number of boxes seen by the last refresh.
    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Whether the last refresh saw no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current endpoint order of `axis`, as `box_id * 4 + field` indices
    /// into the box slice.
    #[inline]
    pub fn axis_order(&self, axis: Axis) -> &[u32] {
        &self.events[axis.index()]
    }

    #[cfg(test)]
    pub(crate) fn axis_candidates(&self, axis: Axis) -> &[(u32, u32)] {
        &self.axis_pairs[axis.index()]
    }

    /// Sweeps one axis and leaves its candidate pairs sorted.
    fn sweep(&mut self, axis: Axis) -> Result<()> {
        let pairs = &mut self.axis_pairs[axis.index()];
        sweep::sweep_axis(axis, &self.events[axis.index()], &mut self.active, pairs)?;
        intersect::sort_pairs(pairs);
        Ok(())
    }

    fn intersect(&mut self) -> Result<()> {
        let [x, y] = &self.axis_pairs;
        intersect::intersect_pairs(x, y, &mut self.collision_pairs)
    }
}

impl<T: Coordinate> Default for SweepContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
