//! Coordinate types accepted by the sweep.
//!
//! Boxes are read from a flat slice of `[min_x, min_y, max_x, max_y]` tuples.
//! Any scalar with a total order can be swept; floats are ordered with
//! `total_cmp` so a stray NaN cannot break the sort.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Scalar type of a box coordinate.
pub trait Coordinate: Copy + Debug + PartialOrd {
    /// Total order used by the event sort.
    fn cmp_coord(&self, other: &Self) -> Ordering;
}

macro_rules! impl_float_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn cmp_coord(&self, other: &Self) -> Ordering {
                    // -0.0 and 0.0 touch
                    if self == other {
                        Ordering::Equal
                    } else {
                        self.total_cmp(other)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_int_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn cmp_coord(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_float_coordinate!(f32, f64);
impl_int_coordinate!(i32, i64);
