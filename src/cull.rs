//! Greedy culling over the collision graph.
//!
//! Collision pairs are the edges of an undirected graph over box ids. For each
//! connected component the box with the most remaining edges is hidden until
//! the component has no edges left, which approximates a minimum vertex cover.
//! Equal degrees go to the smaller box id.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;

/// Fills `culled` with box ids whose removal leaves no pair in `pairs`.
///
/// Components are handled in ascending order of their smallest box id and
/// each component's ids are appended in selection order. Returns the number
/// of components.
pub(crate) fn cull_pairs(pairs: &[(u32, u32)], culled: &mut Vec<u32>) -> Result<usize> {
    culled.clear();
    if pairs.is_empty() {
        return Ok(0);
    }

    let graph = Graph::build(pairs)?;
    let components = graph.components()?;

    // Degrees only shrink, so a heap entry is current iff it matches `degree`.
    let mut degree = graph.degrees()?;
    let mut removed = Vec::new();
    removed.try_reserve_exact(graph.ids.len())?;
    removed.resize(graph.ids.len(), false);
    let mut heap = BinaryHeap::new();

    for members in &components {
        heap.clear();
        heap.try_reserve(members.len())?;
        heap.extend(members.iter().map(|&v| (degree[v], Reverse(v))));

        while let Some((deg, Reverse(v))) = heap.pop() {
            if deg == 0 {
                break;
            }
            if removed[v] || deg != degree[v] {
                continue;
            }
            removed[v] = true;
            culled.try_reserve(1)?;
            culled.push(graph.ids[v]);
            for &u in graph.neighbors(v) {
                if !removed[u] {
                    degree[u] -= 1;
                    if degree[u] > 0 {
                        heap.push((degree[u], Reverse(u)));
                    }
                }
            }
            degree[v] = 0;
        }
    }

    Ok(components.len())
}

/// Compressed adjacency over the box ids that appear in at least one pair.
///
/// Vertices are dense indices into `ids`, which is sorted, so index order
/// matches box id order.
struct Graph {
    ids: Vec<u32>,
    offsets: Vec<usize>,
    adjacency: Vec<usize>,
}

impl Graph {
    fn build(pairs: &[(u32, u32)]) -> Result<Self> {
        let mut ids = Vec::new();
        ids.try_reserve(pairs.len() * 2)?;
        for &(a, b) in pairs {
            ids.push(a);
            ids.push(b);
        }
        ids.sort_unstable();
        ids.dedup();

        let index = |id: u32| ids.binary_search(&id).unwrap_or_default();

        let mut offsets = Vec::new();
        offsets.try_reserve_exact(ids.len() + 1)?;
        offsets.resize(ids.len() + 1, 0);
        for &(a, b) in pairs {
            offsets[index(a) + 1] += 1;
            offsets[index(b) + 1] += 1;
        }
        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(pairs.len() * 2)?;
        adjacency.resize(pairs.len() * 2, 0);
        let mut fill = offsets.clone();
        for &(a, b) in pairs {
            let (ia, ib) = (index(a), index(b));
            adjacency[fill[ia]] = ib;
            fill[ia] += 1;
            adjacency[fill[ib]] = ia;
            fill[ib] += 1;
        }

        Ok(Self { ids, offsets, adjacency })
    }

    #[inline]
    fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[self.offsets[v]..self.offsets[v + 1]]
    }

    fn degrees(&self) -> Result<Vec<usize>> {
        let mut degree = Vec::new();
        degree.try_reserve_exact(self.ids.len())?;
        degree.extend(self.offsets.windows(2).map(|w| w[1] - w[0]));
        Ok(degree)
    }

    /// Connected components via union-find, each listed in ascending order,
    /// ordered by their smallest member.
    fn components(&self) -> Result<Vec<Vec<usize>>> {
        let n = self.ids.len();
        let mut parent = Vec::new();
        parent.try_reserve_exact(n)?;
        parent.extend(0..n);

        for v in 0..n {
            for &u in self.neighbors(v) {
                let (rv, ru) = (find(&mut parent, v), find(&mut parent, u));
                if rv != ru {
                    // Keep the smaller index as root.
                    parent[rv.max(ru)] = rv.min(ru);
                }
            }
        }

        // Roots are the smallest member, so they are met in ascending order.
        let mut slot = Vec::new();
        slot.try_reserve_exact(n)?;
        slot.resize(n, usize::MAX);
        let mut components: Vec<Vec<usize>> = Vec::new();
        for v in 0..n {
            let root = find(&mut parent, v);
            if slot[root] == usize::MAX {
                slot[root] = components.len();
                components.try_reserve(1)?;
                components.push(Vec::new());
            }
            let members = &mut components[slot[root]];
            members.try_reserve(1)?;
            members.push(v);
        }
        Ok(components)
    }
}

fn find(parent: &mut [usize], mut v: usize) -> usize {
    while parent[v] != v {
        parent[v] = parent[parent[v]];
        v = parent[v];
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_edge_culls_smaller_id() {
        let mut culled = Vec::new();
        let components = cull_pairs(&[(0, 1)], &mut culled).unwrap();
        assert_eq!(components, 1);
        assert_eq!(culled, vec![0]);
    }

    #[test]
    fn test_star_culls_center() {
        let mut culled = Vec::new();
        let components = cull_pairs(&[(0, 3), (1, 3), (2, 3), (3, 4)], &mut culled).unwrap();
        assert_eq!(components, 1);
        assert_eq!(culled, vec![3]);
    }

    #[test]
    fn test_components_in_order_of_smallest_member() {
        let mut culled = Vec::new();
        let components = cull_pairs(&[(2, 9), (5, 6), (5, 7)], &mut culled).unwrap();
        assert_eq!(components, 2);
        assert_eq!(culled, vec![2, 5]);
    }

    #[test]
    fn test_path_of_four() {
        // 0-1-2-3: degrees 1,2,2,1. Box 1 goes first, then 2 (degree 1) ties
        // with 3 (degree 1) and wins on id.
        let mut culled = Vec::new();
        let _components = cull_pairs(&[(0, 1), (1, 2), (2, 3)], &mut culled).unwrap();
        assert_eq!(culled, vec![1, 2]);
    }
}
