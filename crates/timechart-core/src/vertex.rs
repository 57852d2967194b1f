// File: crates/timechart-core/src/vertex.rs
// Summary: Streaming vertex reducer: map samples to pixels, merging near-duplicates in one greedy pass.

use crate::scale::{TimeScale, ValueScale};
use crate::types::{Color, Sample, Vertex, MERGED_RADIUS, POINT_RADIUS};

/// Horizontal distance threshold, as a multiple of the previous vertex's
/// radius, below which a new point merges into it.
pub const MERGE_FACTOR: f32 = 1.8;

/// Map filtered, time-sorted samples into an ordered vertex list.
///
/// When `averaging` is on and a mapped point lands within the merge radius
/// of the last vertex, that vertex is replaced in place: x stays put, y
/// becomes the mean of the old y and the new point's y, and the radius
/// switches to the merged size. The cluster's color is never overwritten by
/// a later merge, so a custom color survives any number of merges.
///
/// The pass is greedy and order-dependent; it is a cheap online clustering,
/// not a globally optimal simplification.
pub fn reduce(
    samples: &[Sample],
    time_scale: &TimeScale,
    value_scale: &ValueScale,
    averaging: bool,
    accent: Color,
) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = Vec::with_capacity(samples.len());
    for sample in samples {
        let x = time_scale.to_px(sample.time);
        let y = value_scale.to_px(sample.value);
        let merged = match vertices.last_mut() {
            Some(last) if averaging && x - last.x < last.radius * MERGE_FACTOR => {
                last.y = (last.y + y) / 2.0;
                last.radius = MERGED_RADIUS;
                true
            }
            _ => false,
        };
        if !merged {
            vertices.push(Vertex {
                x,
                y,
                color: sample.color.unwrap_or(accent),
                radius: POINT_RADIUS,
            });
        }
    }
    vertices
}
