//! DOM wiring for the portfolio carousel.
//!
//! The `site_core::Carousel` owns the index and autoplay state; everything
//! here is a read/command view over it. Pointer drags are tracked in CSS
//! pixels and resolved through `on_drag_end`; the track settles onto its
//! rest offset through an animation intent, so the position at rest always
//! equals the exact per-slide offset.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{
    AnimationIntent, Carousel, CarouselOptions, Easing, MotionConfig,
    PORTFOLIO_AUTOPLAY_INTERVAL_MS, TRACK_SETTLE_MS,
};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CAROUSEL_ID;
use crate::dom::EventHook;
use crate::frame::FrameLoop;

pub struct CarouselView {
    _frame_loop: FrameLoop,
    _hooks: Vec<EventHook>,
}

#[derive(Default)]
struct TrackMotion {
    /// Displayed offset, as a percentage of total track width.
    position: f32,
    intent: Option<AnimationIntent>,
    elapsed_ms: f32,
}

#[derive(Default)]
struct DragTracker {
    active: bool,
    start_x: f32,
    last_x: f32,
    last_t: f64,
    prev_x: f32,
    prev_t: f64,
}

impl DragTracker {
    fn begin(&mut self, x: f32, t: f64) {
        self.active = true;
        self.start_x = x;
        self.last_x = x;
        self.prev_x = x;
        self.last_t = t;
        self.prev_t = t;
    }

    fn track(&mut self, x: f32, t: f64) {
        self.prev_x = self.last_x;
        self.prev_t = self.last_t;
        self.last_x = x;
        self.last_t = t;
    }

    fn offset(&self) -> f32 {
        self.last_x - self.start_x
    }

    /// Instantaneous velocity in px/s from the last two pointer samples.
    fn velocity(&self) -> f32 {
        let dt = self.last_t - self.prev_t;
        if dt <= 0.0 {
            return 0.0;
        }
        ((self.last_x - self.prev_x) as f64 / dt * 1000.0) as f32
    }
}

fn apply_transform(track: &web::HtmlElement, position: f32) {
    let _ = track
        .style()
        .set_property("transform", &site_core::track_transform(position));
}

fn refresh_dots(dots: &Option<web::Element>, current: usize) {
    let Some(dots) = dots else { return };
    let children = dots.children();
    for i in 0..children.length() {
        if let Some(el) = children.item(i) {
            let _ = el
                .class_list()
                .toggle_with_force("is-active", i as usize == current);
        }
    }
}

/// Point the settle animation from wherever the track currently is to the
/// carousel's rest offset.
fn retarget(motion: MotionConfig, state: &Carousel, tm: &mut TrackMotion) {
    let target = state.track_offset_percent();
    tm.intent = Some(motion.intent(tm.position, target, TRACK_SETTLE_MS, Easing::EaseOut));
    tm.elapsed_ms = 0.0;
}

fn hide(el: &web::Element) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}

pub fn mount(document: &web::Document, motion: MotionConfig) -> Option<CarouselView> {
    let root = document.get_element_by_id(CAROUSEL_ID)?;
    let track = root
        .query_selector(".carousel-track")
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;

    let len = track.children().length() as usize;
    if len == 0 {
        // nothing to show, and nothing to schedule
        hide(&root);
        return None;
    }

    let prev = root.query_selector(".carousel-prev").ok().flatten();
    let next = root.query_selector(".carousel-next").ok().flatten();
    let dots = root.query_selector(".carousel-dots").ok().flatten();
    let progress = root
        .query_selector(".carousel-progress")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    // Track is len * 100% of the container; each slide is an equal share.
    let _ = track
        .style()
        .set_property("width", &format!("{}%", len * 100));
    let slides = track.children();
    for i in 0..slides.length() {
        if let Some(slide) = slides.item(i).and_then(|el| el.dyn_into::<web::HtmlElement>().ok()) {
            let _ = slide
                .style()
                .set_property("width", &format!("{}%", 100.0 / len as f32));
        }
    }

    let state = Rc::new(RefCell::new(Carousel::new(
        len,
        CarouselOptions {
            auto_play: true,
            auto_play_interval_ms: PORTFOLIO_AUTOPLAY_INTERVAL_MS,
            reduced_motion: motion.reduced_motion,
        },
    )));
    let tm = Rc::new(RefCell::new(TrackMotion::default()));
    let drag = Rc::new(RefCell::new(DragTracker::default()));
    let mut hooks = Vec::new();

    let navigation = state.borrow().navigation_enabled();
    if !navigation {
        // single slide: arrows, dots and the progress strip are suppressed
        for el in [&prev, &next, &dots].into_iter().flatten() {
            hide(el);
        }
        if let Some(bar) = &progress {
            hide(bar);
        }
    }

    if navigation {
        if let Some(dots_el) = &dots {
            dots_el.set_inner_html("");
            for i in 0..len {
                if let Ok(button) = document.create_element("button") {
                    let _ = button.set_attribute("class", "carousel-dot");
                    let _ = button.set_attribute("aria-label", &format!("Go to slide {}", i + 1));
                    let _ = dots_el.append_child(&button);
                    let state = state.clone();
                    let tm = tm.clone();
                    let dots = dots.clone();
                    hooks.push(EventHook::attach(button.as_ref(), "click", move |_| {
                        state.borrow_mut().go_to_slide(i as isize);
                        let s = state.borrow();
                        retarget(motion, &s, &mut tm.borrow_mut());
                        refresh_dots(&dots, s.current_index());
                    }));
                }
            }
        }
        refresh_dots(&dots, 0);

        if let Some(prev_el) = &prev {
            let state = state.clone();
            let tm = tm.clone();
            let dots = dots.clone();
            hooks.push(EventHook::attach(prev_el.as_ref(), "click", move |_| {
                state.borrow_mut().go_to_previous();
                let s = state.borrow();
                retarget(motion, &s, &mut tm.borrow_mut());
                refresh_dots(&dots, s.current_index());
            }));
        }
        if let Some(next_el) = &next {
            let state = state.clone();
            let tm = tm.clone();
            let dots = dots.clone();
            hooks.push(EventHook::attach(next_el.as_ref(), "click", move |_| {
                state.borrow_mut().go_to_next();
                let s = state.borrow();
                retarget(motion, &s, &mut tm.borrow_mut());
                refresh_dots(&dots, s.current_index());
            }));
        }
    }

    // Hover suspends autoplay; leaving restarts the interval from zero.
    {
        let state = state.clone();
        hooks.push(EventHook::attach(root.as_ref(), "pointerenter", move |_| {
            state.borrow_mut().set_hovered(true);
        }));
    }
    {
        let state = state.clone();
        hooks.push(EventHook::attach(root.as_ref(), "pointerleave", move |_| {
            state.borrow_mut().set_hovered(false);
        }));
    }

    // Manual drag. Offsets are CSS pixels; the visual delta is that offset
    // as a share of total track width.
    {
        let state = state.clone();
        let drag = drag.clone();
        let tm = tm.clone();
        let track_el = track.clone();
        hooks.push(EventHook::attach(track.as_ref(), "pointerdown", move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if !state.borrow().navigation_enabled() {
                return;
            }
            drag.borrow_mut().begin(pe.client_x() as f32, ev.time_stamp());
            tm.borrow_mut().intent = None;
            let _ = track_el.set_pointer_capture(pe.pointer_id());
            ev.prevent_default();
        }));
    }
    {
        let state = state.clone();
        let drag = drag.clone();
        let tm = tm.clone();
        let track_el = track.clone();
        hooks.push(EventHook::attach(track.as_ref(), "pointermove", move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let mut d = drag.borrow_mut();
            if !d.active {
                return;
            }
            d.track(pe.client_x() as f32, ev.time_stamp());
            let track_width = track_el.get_bounding_client_rect().width() as f32;
            if track_width > 0.0 {
                let delta = d.offset() / track_width * 100.0;
                let mut m = tm.borrow_mut();
                m.position = state.borrow().track_offset_percent() - delta;
                apply_transform(&track_el, m.position);
            }
        }));
    }
    for release_event in ["pointerup", "pointercancel"] {
        let state = state.clone();
        let drag = drag.clone();
        let tm = tm.clone();
        let dots = dots.clone();
        let track_el = track.clone();
        hooks.push(EventHook::attach(track.as_ref(), release_event, move |ev| {
            let (offset, velocity) = {
                let mut d = drag.borrow_mut();
                if !d.active {
                    return;
                }
                d.active = false;
                (d.offset(), d.velocity())
            };
            if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                let _ = track_el.release_pointer_capture(pe.pointer_id());
            }
            let outcome = state.borrow_mut().on_drag_end(offset, velocity);
            log::info!("[carousel] drag release offset={offset:.0}px -> {outcome:?}");
            let s = state.borrow();
            retarget(motion, &s, &mut tm.borrow_mut());
            refresh_dots(&dots, s.current_index());
        }));
    }

    apply_transform(&track, 0.0);

    // Drives autoplay and the settle animation. Autoplay uses measured
    // wall-clock deltas; the background effects use their own fixed step.
    let frame_loop = {
        let state = state.clone();
        let tm = tm.clone();
        let drag = drag.clone();
        let dots = dots.clone();
        let track = track.clone();
        let mut last = instant::Instant::now();
        FrameLoop::start(move || {
            let now = instant::Instant::now();
            let dt_ms = (now - last).as_secs_f64() * 1000.0;
            last = now;

            if state.borrow_mut().tick(dt_ms) {
                let s = state.borrow();
                retarget(motion, &s, &mut tm.borrow_mut());
                refresh_dots(&dots, s.current_index());
            }

            if !drag.borrow().active {
                let mut m = tm.borrow_mut();
                if let Some(intent) = m.intent {
                    m.elapsed_ms += dt_ms as f32;
                    m.position = intent.sample(m.elapsed_ms);
                    if intent.finished(m.elapsed_ms) {
                        m.intent = None;
                    }
                    apply_transform(&track, m.position);
                }
            }

            if let Some(bar) = &progress {
                let frac = state.borrow().auto_play_progress();
                let _ = bar
                    .style()
                    .set_property("width", &format!("{:.1}%", frac * 100.0));
            }
        })
    };

    Some(CarouselView {
        _frame_loop: frame_loop,
        _hooks: hooks,
    })
}
