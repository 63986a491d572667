//! Benchmark for full `overlap` (sort, sweep, intersect) and `cull`
//!
//! Boxes are scattered over a 100x100 space with sizes UP TO a maximum, so the
//! number of overlaps grows with the size category.

use rand::Rng;
use rand::SeedableRng;
use sprune::SweepContext;
use std::time::Instant;

/// Generate a random bounding box with variable size UP TO max_size
fn add_random_box<R: Rng>(rng: &mut R, boxes: &mut Vec<f64>, max_size: f64) {
    let min_x = rng.random_range(0.0..(100.0 - max_size));
    let min_y = rng.random_range(0.0..(100.0 - max_size));
    let box_width = rng.random_range(0.0..max_size);
    let box_height = rng.random_range(0.0..max_size);

    boxes.push(min_x);
    boxes.push(min_y);
    boxes.push(min_x + box_width);
    boxes.push(min_y + box_height);
}

fn bench_overlap(num_items: usize, max_size: f64, previous: Option<SweepContext<f64>>) -> SweepContext<f64> {
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut boxes = Vec::with_capacity(num_items * 4);
    for _ in 0..num_items {
        add_random_box(&mut rng, &mut boxes, max_size);
    }

    let start = Instant::now();
    let mut ctx = SweepContext::overlap(&boxes, previous).expect("overlap");
    let overlap_elapsed = start.elapsed();

    let start = Instant::now();
    let culled = ctx.cull().expect("cull").len();
    let cull_elapsed = start.elapsed();

    println!(
        "{:>8} boxes, size <= {:>5.2}: overlap {:>10.2}ms ({:>8} pairs), cull {:>8.2}ms ({:>7} culled)",
        num_items,
        max_size,
        overlap_elapsed.as_secs_f64() * 1000.0,
        ctx.num_collision_pairs(),
        cull_elapsed.as_secs_f64() * 1000.0,
        culled,
    );
    ctx
}

fn main() {
    println!("Sweep and Prune Overlap Benchmark");
    println!("=================================\n");

    let mut ctx = None;
    for &num_items in &[1_000, 10_000, 100_000] {
        for &max_size in &[0.1, 0.5, 1.0] {
            // Reuse buffers between runs like an application would.
            ctx = Some(bench_overlap(num_items, max_size, ctx));
        }
    }
}
