//! Point sampling for the animated financial-graph background.
//!
//! Every frame regenerates the full polyline from the elapsed-time
//! accumulator; there is no persistent point history. The noise term is a
//! sinusoid so consecutive frames interpolate continuously.

use glam::Vec2;

use crate::constants::GRAPH_POINT_COUNT;

/// Sample the polyline for one frame. `width`/`height` are CSS pixels,
/// `time_ms` the effect's elapsed-time accumulator.
pub fn sample_points(width: f32, height: f32, time_ms: f32) -> Vec<Vec2> {
    let n = GRAPH_POINT_COUNT;
    let mut points = Vec::with_capacity(n);
    let base_y = height * 0.7;
    let amplitude = height * 0.3;
    let frequency = 0.02;
    for i in 0..n {
        let x = (i as f32 / (n - 1) as f32) * width;
        let noise = (i as f32 * frequency + time_ms * 0.001).sin() * amplitude * 0.5;
        let trend = -(i as f32) * 2.0; // slight upward drift across the line
        points.push(Vec2::new(x, base_y + noise + trend));
    }
    points
}

/// Opacity of the pulsing marker drawn on every 5th point.
#[inline]
pub fn marker_opacity(index: usize, time_ms: f32) -> f32 {
    0.6 + 0.4 * (time_ms * 0.003 + index as f32 * 0.5).sin()
}
