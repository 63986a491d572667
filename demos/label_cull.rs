//! Hide overlapping map labels while the map pans.
use sprune::prelude::*;

const LABELS: [(&str, f32, f32); 6] = [
    ("Harbor", 10.0, 10.0),
    ("Old Town", 14.0, 11.0),
    ("Station", 30.0, 5.0),
    ("Museum", 17.0, 12.0),
    ("Park", 31.0, 30.0),
    ("Market", 33.0, 6.0),
];

/// Label boxes with a fixed height and a width proportional to the text.
fn layout(zoom: f32) -> Vec<f32> {
    let mut boxes = Vec::with_capacity(LABELS.len() * 4);
    for &(name, x, y) in &LABELS {
        let (x, y) = (x * zoom, y * zoom);
        boxes.extend_from_slice(&[x, y, x + name.len() as f32, y + 1.5]);
    }
    boxes
}

fn main() -> Result<(), SweepError> {
    let mut zoom = 1.0;
    let mut boxes = layout(zoom);
    let mut ctx = SweepContext::overlap(&boxes, None)?;

    for frame in 0..5 {
        let hidden = ctx.cull()?.to_vec();
        let shown: Vec<&str> = ctx.visible().map(|id| LABELS[id as usize].0).collect();
        println!(
            "frame {frame} zoom {zoom:.2}: overlaps {:?}, hidden {:?}, shown {:?}",
            ctx.collision_pairs(),
            hidden,
            shown
        );

        // Zooming in spreads the labels apart.
        zoom *= 1.25;
        boxes.copy_from_slice(&layout(zoom));
        let changed = ctx.update(&boxes)?;
        println!("  zoomed, collision set changed: {changed}");
    }
    Ok(())
}
