//! Self-rescheduling requestAnimationFrame loop with synchronous
//! cancellation.
//!
//! Each invocation runs the frame callback to completion before scheduling
//! the next one, so frames never overlap. Dropping the handle cancels the
//! pending callback; nothing fires afterwards.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let raf_for_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if raf_for_tick.get().is_none() {
                // cancelled between scheduling and firing
                return;
            }
            frame();
            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        raf_for_tick.set(Some(id));
                    }
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Ok(id) =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                raf_id.set(Some(id));
            }
        }
        Self { raf_id, tick }
    }

    /// Cancel the pending frame callback. Also drops the tick closure, which
    /// breaks the Rc cycle the self-rescheduling closure holds on itself.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
