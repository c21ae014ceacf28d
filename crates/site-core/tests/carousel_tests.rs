use site_core::{resolve_drag, Carousel, CarouselOptions, DragOutcome};

fn carousel(len: usize) -> Carousel {
    Carousel::new(len, CarouselOptions::default())
}

fn autoplay_carousel(len: usize, interval_ms: f64) -> Carousel {
    Carousel::new(
        len,
        CarouselOptions {
            auto_play: true,
            auto_play_interval_ms: interval_ms,
            reduced_motion: false,
        },
    )
}

#[test]
fn next_and_previous_wrap_at_boundaries() {
    let mut c = carousel(4);
    assert_eq!(c.current_index(), 0);

    c.go_to_previous();
    assert_eq!(c.current_index(), 3); // 0 + previous wraps to n-1

    c.go_to_next();
    assert_eq!(c.current_index(), 0); // n-1 + next wraps to 0
}

#[test]
fn index_stays_in_bounds_for_any_sequence() {
    let mut c = carousel(5);
    // alternating walk with a bias, long enough to cross both boundaries
    for step in 0..100 {
        if step % 3 == 0 {
            c.go_to_previous();
        } else {
            c.go_to_next();
        }
        assert!(c.current_index() < 5);
    }
}

#[test]
fn go_to_slide_clamps_any_integer() {
    let mut c = carousel(4);

    c.go_to_slide(2);
    assert_eq!(c.current_index(), 2);

    c.go_to_slide(99);
    assert_eq!(c.current_index(), 3);

    c.go_to_slide(-7);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn drag_offset_threshold_commits_a_change() {
    // 60 px exceeds the 50 px distance threshold
    assert_eq!(resolve_drag(60.0, 0.0), DragOutcome::Previous);
}

#[test]
fn drag_below_both_thresholds_snaps_back() {
    assert_eq!(resolve_drag(10.0, 0.0), DragOutcome::Stay);
}

#[test]
fn drag_velocity_threshold_commits_even_with_small_offset() {
    // -600 px/s exceeds the velocity threshold; negative direction advances
    assert_eq!(resolve_drag(-10.0, -600.0), DragOutcome::Next);
}

#[test]
fn drag_end_applies_the_outcome_to_the_index() {
    let mut c = carousel(3);
    assert_eq!(c.on_drag_end(-80.0, 0.0), DragOutcome::Next);
    assert_eq!(c.current_index(), 1);

    assert_eq!(c.on_drag_end(80.0, 0.0), DragOutcome::Previous);
    assert_eq!(c.current_index(), 0);

    assert_eq!(c.on_drag_end(5.0, 100.0), DragOutcome::Stay);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn autoplay_advances_once_per_interval() {
    let mut c = autoplay_carousel(4, 5000.0);
    for _ in 0..3 {
        c.tick(5000.0);
    }
    // 3 elapsed intervals -> exactly 3 advances modulo 4
    assert_eq!(c.current_index(), 3);

    c.tick(5000.0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn autoplay_accumulates_partial_ticks() {
    let mut c = autoplay_carousel(4, 5000.0);
    for _ in 0..4 {
        assert!(!c.tick(1000.0));
    }
    assert!(c.tick(1000.0));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn hover_suspends_autoplay_and_resume_restarts_the_interval() {
    let mut c = autoplay_carousel(4, 5000.0);

    c.set_hovered(true);
    c.tick(10_000.0); // two intervals while hovered
    assert_eq!(c.current_index(), 0);

    // leaving hover starts a fresh interval; no carry-over of elapsed time
    c.set_hovered(false);
    assert!(!c.tick(4999.0));
    assert!(c.tick(1.0));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn hover_resume_discards_partial_elapsed_time() {
    let mut c = autoplay_carousel(4, 5000.0);
    c.tick(4000.0);
    c.set_hovered(true);
    c.set_hovered(false);
    // the 4000 ms accumulated before the hover no longer counts
    assert!(!c.tick(4000.0));
    assert!(c.tick(1000.0));
}

#[test]
fn single_item_disables_navigation_and_autoplay() {
    let mut c = autoplay_carousel(1, 5000.0);
    assert!(!c.navigation_enabled());
    assert!(!c.auto_play_enabled());

    c.go_to_next();
    c.go_to_previous();
    assert!(!c.tick(20_000.0));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn empty_carousel_ignores_every_operation() {
    let mut c = carousel(0);
    assert!(c.is_empty());
    c.go_to_slide(3);
    c.go_to_next();
    c.go_to_previous();
    c.on_drag_end(500.0, 500.0);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.track_offset_percent(), 0.0);
}

#[test]
fn reduced_motion_disables_autoplay() {
    let mut c = Carousel::new(
        4,
        CarouselOptions {
            auto_play: true,
            auto_play_interval_ms: 5000.0,
            reduced_motion: true,
        },
    );
    assert!(!c.auto_play_enabled());
    assert!(!c.tick(20_000.0));
}

#[test]
fn track_rest_offset_is_exactly_the_per_slide_share() {
    let mut c = carousel(4);
    assert_eq!(c.track_offset_percent(), 0.0);

    c.go_to_slide(2);
    assert_eq!(c.track_offset_percent(), 50.0); // 2 * (100 / 4)

    c.go_to_slide(3);
    assert_eq!(c.track_offset_percent(), 75.0);
}

#[test]
fn track_transform_negates_the_position_without_doubling_signs() {
    use site_core::track_transform;

    assert_eq!(track_transform(50.0), "translateX(-50%)");
    assert_eq!(track_transform(0.0), "translateX(-0%)");
    // dragging rightwards past slide 0 pulls the position negative; the
    // transform must come out positive, not "--5%"
    assert_eq!(track_transform(-5.0), "translateX(5%)");
    assert!(!track_transform(-5.0).contains("--"));
}

#[test]
fn autoplay_progress_tracks_the_current_interval() {
    let mut c = autoplay_carousel(4, 5000.0);
    c.tick(2500.0);
    assert!((c.auto_play_progress() - 0.5).abs() < 1e-9);

    c.set_hovered(true);
    assert_eq!(c.auto_play_progress(), 0.0);
}
