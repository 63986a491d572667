//! # SPRUNE - Sweep and Prune for 2D Boxes
//!
//! Finds which pairs among a set of axis-aligned 2D boxes overlap, keeps that
//! set up to date as the boxes move, and picks a small set of boxes to hide so
//! that none of the remaining ones overlap.
//!
//! ## Features
//!
//! - **Sweep and Prune**: Sorts interval endpoints per axis and sweeps them to find overlaps
//! - **Temporal Coherence**: Re-sorts from the previous frame's order with an insertion sort
//! - **Culling**: Greedy vertex cover over the collision graph, useful for hiding map labels
//! - **Any Scalar**: Works on `f32`, `f64`, `i32` and `i64` coordinates
//!
//! ## Quick Start
//!
//! ```rust
//! use sprune::prelude::*;
//!
//! // Boxes as (min_x, min_y, max_x, max_y) tuples in one flat buffer
//! let mut boxes = vec![
//!     0.0, 0.0, 2.0, 2.0,   // Box 0
//!     1.0, 1.0, 3.0, 3.0,   // Box 1: overlaps box 0
//!     5.0, 5.0, 6.0, 6.0,   // Box 2: distant box
//! ];
//!
//! let mut ctx = SweepContext::overlap(&boxes, None).unwrap();
//! assert_eq!(ctx.collision_pairs(), &[(0, 1)]);
//!
//! // Animate: move the boxes in place, then update
//! for v in boxes.iter_mut() {
//!     *v += 0.01;
//! }
//! let changed = ctx.update(&boxes).unwrap();
//! assert!(!changed);
//!
//! // Hide boxes until nothing overlaps
//! assert_eq!(ctx.cull().unwrap(), &[0]);
//! assert_eq!(ctx.visible().collect::<Vec<_>>(), vec![1, 2]);
//! ```
//!
//! ## How It Works
//!
//! Every box contributes a min and a max endpoint on each axis. Endpoints are
//! sorted by coordinate and swept left to right; when a box opens, it forms a
//! candidate pair with every box currently open. Pairs that are candidates on
//! both axes overlap in 2D. Touching edges count as overlapping.
//!
//! Between frames the endpoint orders are kept. After small motion they are
//! nearly sorted, so an insertion sort restores them in close to linear time,
//! and an axis whose order did not change is not swept again.

pub mod context;
pub mod coord;
pub mod error;
pub mod event;
pub mod prelude;

mod cull;
mod incremental;
mod intersect;
mod sweep;

pub use context::SweepContext;
pub use coord::Coordinate;
pub use error::{Result, SweepError, Violation};
pub use event::{Axis, MAX_BOXES};

#[cfg(test)]
mod comparison_tests;
