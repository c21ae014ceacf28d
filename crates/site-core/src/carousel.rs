//! Portfolio carousel state machine.
//!
//! Owns the current index, hover state, and the autoplay accumulator. The
//! frontend is a pure read/command view over this: indicator dots, arrows,
//! and the track transform all derive from `current_index` and
//! `track_offset_percent`, never the other way round.

use crate::constants::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, DRAG_OFFSET_THRESHOLD_PX, DRAG_VELOCITY_THRESHOLD_PX_S,
};

#[derive(Clone, Debug)]
pub struct CarouselOptions {
    pub auto_play: bool,
    pub auto_play_interval_ms: f64,
    pub reduced_motion: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play: false,
            auto_play_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            reduced_motion: false,
        }
    }
}

/// Outcome of releasing a manual drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Previous,
    Next,
    /// Neither threshold reached; the track snaps back to the current slide.
    Stay,
}

/// Decide whether a released drag commits a slide change.
///
/// Commits when the swipe was fast (|velocity| > 500 px/s) or long
/// (|offset| > 50 px). Positive offset/velocity means the user pulled the
/// track rightwards, revealing the previous slide.
#[inline]
pub fn resolve_drag(offset_x: f32, velocity_x: f32) -> DragOutcome {
    if velocity_x.abs() > DRAG_VELOCITY_THRESHOLD_PX_S || offset_x.abs() > DRAG_OFFSET_THRESHOLD_PX
    {
        if offset_x > 0.0 || velocity_x > 0.0 {
            DragOutcome::Previous
        } else {
            DragOutcome::Next
        }
    } else {
        DragOutcome::Stay
    }
}

/// CSS transform for a track position, in percent of total track width.
/// The rest offset is positive and moves the track leftwards; a rightward
/// drag past slide 0 makes the position negative, so the sign must be
/// computed rather than written into the format string.
pub fn track_transform(position_percent: f32) -> String {
    format!("translateX({}%)", -position_percent)
}

pub struct Carousel {
    len: usize,
    current: usize,
    hovered: bool,
    auto_play: bool,
    interval_ms: f64,
    elapsed_ms: f64,
}

impl Carousel {
    pub fn new(len: usize, options: CarouselOptions) -> Self {
        // Autoplay makes no sense with a single slide, and is dropped
        // entirely under reduced motion.
        let auto_play = options.auto_play && len > 1 && !options.reduced_motion;
        Self {
            len,
            current: 0,
            hovered: false,
            auto_play,
            interval_ms: options.auto_play_interval_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Arrows and indicator dots are suppressed for 0 or 1 slides.
    #[inline]
    pub fn navigation_enabled(&self) -> bool {
        self.len > 1
    }

    #[inline]
    pub fn auto_play_enabled(&self) -> bool {
        self.auto_play
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Jump to a slide, clamping any integer into `[0, len-1]`. Never fails;
    /// an out-of-range request lands on the nearest boundary.
    pub fn go_to_slide(&mut self, index: isize) {
        if self.len == 0 {
            return;
        }
        self.current = index.clamp(0, self.len as isize - 1) as usize;
    }

    /// Retreat one slide, wrapping from the first back to the last.
    pub fn go_to_previous(&mut self) {
        if self.len > 1 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn go_to_next(&mut self) {
        if self.len > 1 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Resolve a released drag against the distance/velocity thresholds and
    /// apply the result to the index.
    pub fn on_drag_end(&mut self, offset_x: f32, velocity_x: f32) -> DragOutcome {
        let outcome = resolve_drag(offset_x, velocity_x);
        match outcome {
            DragOutcome::Previous => self.go_to_previous(),
            DragOutcome::Next => self.go_to_next(),
            DragOutcome::Stay => {}
        }
        outcome
    }

    /// Hover suspends autoplay. Leaving hover restarts the interval from
    /// zero; partial elapsed time is intentionally not preserved.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.elapsed_ms = 0.0;
        }
    }

    /// Advance the autoplay accumulator by `dt_ms` of wall-clock time.
    /// Returns true if the index moved. One advance per full interval, so a
    /// long stall catches up rather than skipping slides silently.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.auto_play || self.hovered {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        let mut advanced = false;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.go_to_next();
            advanced = true;
        }
        advanced
    }

    /// Fraction of the current autoplay interval already elapsed, for the
    /// progress strip. Zero whenever autoplay is suspended.
    pub fn auto_play_progress(&self) -> f64 {
        if !self.auto_play || self.hovered {
            return 0.0;
        }
        (self.elapsed_ms / self.interval_ms).clamp(0.0, 1.0)
    }

    /// Rest position of the track, as a percentage of total track width.
    /// The track is `len * 100%` of the container wide, so each slide
    /// occupies `100 / len` percent of it. The view negates this into a
    /// `translateX`.
    pub fn track_offset_percent(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        self.current as f32 * (100.0 / self.len as f32)
    }
}
