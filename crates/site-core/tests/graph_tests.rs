use site_core::{marker_opacity, sample_points, GRAPH_POINT_COUNT};

#[test]
fn polyline_has_fifty_points_spanning_the_width() {
    let points = sample_points(800.0, 400.0, 0.0);
    assert_eq!(points.len(), GRAPH_POINT_COUNT);
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[GRAPH_POINT_COUNT - 1].x, 800.0);
    for pair in points.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn consecutive_frames_interpolate_continuously() {
    // one nominal 16 ms step should move no point by more than a pixel
    let a = sample_points(800.0, 400.0, 1000.0);
    let b = sample_points(800.0, 400.0, 1016.0);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.x, pb.x);
        assert!((pa.y - pb.y).abs() < 1.0);
    }
}

#[test]
fn vertical_coordinates_stay_near_the_band() {
    // base 0.7h with +/- 0.15h of noise and the linear trend
    let h = 400.0_f32;
    for t in [0.0, 500.0, 5000.0, 60_000.0] {
        for (i, p) in sample_points(800.0, h, t).iter().enumerate() {
            let trend = -(i as f32) * 2.0;
            assert!(p.y >= h * 0.7 - h * 0.15 + trend - 1e-3);
            assert!(p.y <= h * 0.7 + h * 0.15 + trend + 1e-3);
        }
    }
}

#[test]
fn marker_opacity_oscillates_within_bounds() {
    for i in (0..GRAPH_POINT_COUNT).step_by(5) {
        for t in 0..500 {
            let o = marker_opacity(i, t as f32 * 16.0);
            assert!((0.2..=1.0).contains(&o));
        }
    }
}
