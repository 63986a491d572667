//! Comparison tests between the sweep and a brute-force all-pairs overlap check

#[cfg(test)]
mod tests {
    use crate::SweepContext;
    use rand::{Rng, SeedableRng};

    /// All pairs `(a, b)`, `a < b`, whose closed intervals overlap on both axes.
    fn brute_force_pairs(boxes: &[f64]) -> Vec<(u32, u32)> {
        let n = boxes.len() / 4;
        let mut pairs = Vec::new();
        for a in 0..n {
            let ba = &boxes[a * 4..a * 4 + 4];
            for b in (a + 1)..n {
                let bb = &boxes[b * 4..b * 4 + 4];
                if ba[0] <= bb[2] && bb[0] <= ba[2] && ba[1] <= bb[3] && bb[1] <= ba[3] {
                    pairs.push((a as u32, b as u32));
                }
            }
        }
        pairs
    }

    fn random_boxes<R: Rng>(rng: &mut R, count: usize, extent: f64, max_size: f64) -> Vec<f64> {
        let mut boxes = Vec::with_capacity(count * 4);
        for _ in 0..count {
            let min_x = rng.random_range(0.0..extent);
            let min_y = rng.random_range(0.0..extent);
            boxes.push(min_x);
            boxes.push(min_y);
            boxes.push(min_x + rng.random_range(0.0..max_size));
            boxes.push(min_y + rng.random_range(0.0..max_size));
        }
        boxes
    }

    #[test]
    fn test_random_sparse_matches_brute_force() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let boxes = random_boxes(&mut rng, 500, 100.0, 3.0);
        let ctx = SweepContext::overlap(&boxes, None).unwrap();
        assert_eq!(ctx.collision_pairs(), brute_force_pairs(&boxes).as_slice());
    }

    #[test]
    fn test_random_dense_matches_brute_force() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let boxes = random_boxes(&mut rng, 200, 20.0, 10.0);
        let ctx = SweepContext::overlap(&boxes, None).unwrap();
        let expected = brute_force_pairs(&boxes);
        assert!(expected.len() > 200, "dense scene should have many overlaps");
        assert_eq!(ctx.collision_pairs(), expected.as_slice());
    }

    #[test]
    fn test_grid_with_shared_edges_matches_brute_force() {
        // Unit cells on an integer grid: every neighbour, diagonal included, touches.
        let mut boxes = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let (x, y) = (col as f64, row as f64);
                boxes.extend_from_slice(&[x, y, x + 1.0, y + 1.0]);
            }
        }
        let ctx = SweepContext::overlap(&boxes, None).unwrap();
        let expected = brute_force_pairs(&boxes);
        // 8x8 grid: 2 * 8 * 7 edge neighbours plus 2 * 7 * 7 diagonal neighbours
        assert_eq!(expected.len(), 112 + 98);
        assert_eq!(ctx.collision_pairs(), expected.as_slice());
    }

    #[test]
    fn test_integer_coordinates_match_float() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let ints: Vec<i32> = (0..400).map(|_| rng.random_range(0..50)).collect();
        // Make every box well formed.
        let ints: Vec<i32> = ints
            .chunks(4)
            .flat_map(|c| [c[0].min(c[2]), c[1].min(c[3]), c[0].max(c[2]), c[1].max(c[3])])
            .collect();
        let floats: Vec<f64> = ints.iter().map(|&v| v as f64).collect();

        let int_ctx = SweepContext::overlap(&ints, None).unwrap();
        let float_ctx = SweepContext::overlap(&floats, None).unwrap();
        assert_eq!(int_ctx.collision_pairs(), float_ctx.collision_pairs());
        assert_eq!(float_ctx.collision_pairs(), brute_force_pairs(&floats).as_slice());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let boxes = random_boxes(&mut rng, 300, 50.0, 5.0);
        let first = SweepContext::overlap(&boxes, None).unwrap();
        let second = SweepContext::overlap(&boxes, None).unwrap();
        assert_eq!(first.collision_pairs(), second.collision_pairs());
        assert_eq!(first.axis_order(crate::Axis::X), second.axis_order(crate::Axis::X));
    }
}
