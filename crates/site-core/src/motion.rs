//! Declarative animation intents.
//!
//! A small property -> {from, to, duration, easing} descriptor interpreted
//! by the frontend. This deliberately does not reproduce spring physics;
//! only the start/end/duration contract is promised, and `sample` clamps so
//! a finished animation rests exactly on its target.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationIntent {
    pub from: f32,
    pub to: f32,
    pub duration_ms: f32,
    pub easing: Easing,
}

impl AnimationIntent {
    /// Value at `elapsed_ms`. Clamped: past the duration this returns
    /// exactly `to`, so there is no residual drift at rest.
    pub fn sample(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    #[inline]
    pub fn finished(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Motion configuration threaded explicitly into components at construction
/// rather than queried from a global at use time.
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionConfig {
    pub reduced_motion: bool,
    /// Small viewports run animations at 70% of the desktop duration.
    pub mobile: bool,
}

impl MotionConfig {
    /// Build an intent honoring the reduced-motion and mobile settings.
    /// Reduced motion collapses the duration to a near-instant hop with the
    /// same endpoints.
    pub fn intent(&self, from: f32, to: f32, duration_ms: f32, easing: Easing) -> AnimationIntent {
        let duration_ms = if self.reduced_motion {
            10.0
        } else if self.mobile {
            duration_ms * 0.7
        } else {
            duration_ms
        };
        AnimationIntent {
            from,
            to,
            duration_ms,
            easing,
        }
    }
}

/// Duration of the carousel track settle after a navigation or drag release.
pub const TRACK_SETTLE_MS: f32 = 400.0;
