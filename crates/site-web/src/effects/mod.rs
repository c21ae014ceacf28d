//! Canvas background effects and the runner that owns their lifecycle.
//!
//! Lifecycle: size the backing store (DPR-aware) before the first paint,
//! then run clear -> compute -> paint -> advance once per display frame.
//! A window resize regenerates size-dependent structures without restarting
//! the loop. Dropping the runner cancels the frame callback and removes the
//! resize listener.

mod circuit;
mod graph;

pub use circuit::CircuitEffect;
pub use graph::GraphEffect;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use site_core::MotionConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::{self, EventHook};
use crate::frame::FrameLoop;

pub trait Effect {
    /// Regenerate whatever depends on the canvas size. CSS-pixel dimensions.
    fn resize(&mut self, width: f64, height: f64);
    /// Compute this frame's visual state, paint it, and advance the
    /// elapsed-time accumulator by one nominal step. The runner has already
    /// cleared the surface.
    fn frame(&mut self, ctx: &web::CanvasRenderingContext2d, width: f64, height: f64);
}

pub struct EffectRunner {
    _frame_loop: Option<FrameLoop>,
    _resize: Option<EventHook>,
}

/// Mount an effect on a canvas. Returns `None` when the 2D context is
/// unavailable; the effect then renders nothing and nothing is scheduled.
pub fn mount(
    canvas: &web::HtmlCanvasElement,
    effect: impl Effect + 'static,
    motion: MotionConfig,
) -> Option<EffectRunner> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    // Backing size must be right before the first paint to avoid a blurry
    // first frame.
    let css_size = dom::sync_canvas_backing_size(canvas, &ctx);
    let effect = Rc::new(RefCell::new(effect));
    effect.borrow_mut().resize(css_size.0, css_size.1);
    let size = Rc::new(Cell::new(css_size));

    let paint = {
        let ctx = ctx.clone();
        let effect = effect.clone();
        let size = size.clone();
        Rc::new(move || {
            let (w, h) = size.get();
            ctx.clear_rect(0.0, 0.0, w, h);
            effect.borrow_mut().frame(&ctx, w, h);
        })
    };

    if motion.reduced_motion {
        // One static frame, no loop. Resize still repaints so the visual
        // does not smear.
        paint();
        let resize = {
            let canvas = canvas.clone();
            let paint = paint.clone();
            let effect = effect.clone();
            EventHook::attach_window("resize", move |_| {
                let css = dom::sync_canvas_backing_size(&canvas, &ctx);
                size.set(css);
                effect.borrow_mut().resize(css.0, css.1);
                paint();
            })
        };
        return Some(EffectRunner {
            _frame_loop: None,
            _resize: resize,
        });
    }

    let frame_loop = {
        let paint = paint.clone();
        FrameLoop::start(move || paint())
    };
    let resize = {
        let canvas = canvas.clone();
        EventHook::attach_window("resize", move |_| {
            let css = dom::sync_canvas_backing_size(&canvas, &ctx);
            size.set(css);
            effect.borrow_mut().resize(css.0, css.1);
        })
    };

    Some(EffectRunner {
        _frame_loop: Some(frame_loop),
        _resize: resize,
    })
}
