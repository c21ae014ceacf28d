use site_core::{AnimationIntent, Easing, MotionConfig};

#[test]
fn easing_preserves_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}

#[test]
fn easing_is_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for step in 1..=100 {
            let v = easing.apply(step as f32 / 100.0);
            assert!(v >= prev, "{easing:?} decreased at step {step}");
            prev = v;
        }
    }
}

#[test]
fn sample_rests_exactly_on_the_target() {
    let intent = AnimationIntent {
        from: 25.0,
        to: 50.0,
        duration_ms: 400.0,
        easing: Easing::EaseOut,
    };
    assert_eq!(intent.sample(0.0), 25.0);
    assert_eq!(intent.sample(400.0), 50.0);
    // no residual drift however long we keep sampling
    assert_eq!(intent.sample(40_000.0), 50.0);
    assert!(intent.finished(400.0));
    assert!(!intent.finished(399.0));
}

#[test]
fn zero_duration_jumps_to_the_target() {
    let intent = AnimationIntent {
        from: 0.0,
        to: 75.0,
        duration_ms: 0.0,
        easing: Easing::Linear,
    };
    assert_eq!(intent.sample(0.0), 75.0);
}

#[test]
fn reduced_motion_collapses_the_duration() {
    let config = MotionConfig {
        reduced_motion: true,
        mobile: false,
    };
    let intent = config.intent(0.0, 100.0, 400.0, Easing::EaseOut);
    assert_eq!(intent.duration_ms, 10.0);
    assert_eq!(intent.sample(10.0), 100.0);
}

#[test]
fn mobile_durations_run_thirty_percent_faster() {
    let config = MotionConfig {
        reduced_motion: false,
        mobile: true,
    };
    let intent = config.intent(0.0, 100.0, 400.0, Easing::EaseOut);
    assert!((intent.duration_ms - 280.0).abs() < 1e-3);
}
