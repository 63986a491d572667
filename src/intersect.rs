//! Cross-axis pair intersection.
//!
//! A pair overlaps in 2D exactly when it is a candidate on both axes.

use crate::error::Result;

/// Sorts candidate pairs by `(first, second)`.
#[inline]
pub(crate) fn sort_pairs(pairs: &mut [(u32, u32)]) {
    pairs.sort_unstable();
}

/// Writes the pairs present in both sorted inputs to `out`, ascending.
///
/// Walks the shorter side and binary searches the longer one.
pub(crate) fn intersect_pairs(
    a: &[(u32, u32)],
    b: &[(u32, u32)],
    out: &mut Vec<(u32, u32)>,
) -> Result<()> {
    out.clear();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    out.try_reserve(shorter.len())?;
    for pair in shorter {
        if longer.binary_search(pair).is_ok() {
            out.push(*pair);
        }
    }
    Ok(())
}
