//! Explicit environment queries, invoked at initialization and passed down.
//!
//! Nothing here is cached at module load; callers re-run `probe` on resize
//! events if they need a fresh snapshot.

use site_core::{MotionConfig, CIRCUIT_GRID_SPACING, CIRCUIT_GRID_SPACING_MOBILE};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportKind {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportKind {
    pub fn from_width(width: f64) -> Self {
        if width < 768.0 {
            ViewportKind::Mobile
        } else if width < 1024.0 {
            ViewportKind::Tablet
        } else {
            ViewportKind::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Environment {
    pub reduced_motion: bool,
    pub viewport: ViewportKind,
}

pub fn probe() -> Environment {
    let reduced_motion = web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    let viewport = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(ViewportKind::from_width)
        .unwrap_or(ViewportKind::Desktop);
    Environment {
        reduced_motion,
        viewport,
    }
}

impl Environment {
    pub fn motion_config(&self) -> MotionConfig {
        MotionConfig {
            reduced_motion: self.reduced_motion,
            mobile: self.viewport == ViewportKind::Mobile,
        }
    }

    /// Small viewports get a sparser circuit field.
    pub fn circuit_grid_spacing(&self) -> f32 {
        match self.viewport {
            ViewportKind::Mobile => CIRCUIT_GRID_SPACING_MOBILE,
            _ => CIRCUIT_GRID_SPACING,
        }
    }
}
