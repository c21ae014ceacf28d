#![cfg(target_arch = "wasm32")]
//! Browser wiring for the AureonCapital site components.
//!
//! Binds the pure engines from `site-core` to the page: the hero graph and
//! circuit canvases, the portfolio carousel, and the contact form. Every
//! mounted component hands back an RAII handle; dropping it cancels its
//! pending frame callback and removes its listeners.

mod carousel_view;
mod constants;
mod contact_view;
mod dom;
mod effects;
mod env;
mod frame;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use carousel_view::CarouselView;
use contact_view::ContactView;
use effects::EffectRunner;

enum Mounted {
    Effect(EffectRunner),
    Carousel(CarouselView),
    Contact(ContactView),
}

thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

fn register(component: Mounted) {
    MOUNTED.with(|m| m.borrow_mut().push(component));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Environment is probed once here and threaded down explicitly; nothing
    // below reads globals at use time.
    let environment = env::probe();
    log::info!("environment: {:?}", environment);
    let motion = environment.motion_config();

    if let Some(canvas) = dom::canvas_by_id(&document, constants::GRAPH_CANVAS_ID) {
        if let Some(runner) = effects::mount(&canvas, effects::GraphEffect::new(), motion) {
            register(Mounted::Effect(runner));
        }
    }

    if let Some(canvas) = dom::canvas_by_id(&document, constants::CIRCUIT_CANVAS_ID) {
        let effect = effects::CircuitEffect::new(
            environment.circuit_grid_spacing(),
            js_sys::Date::now() as u64,
        );
        if let Some(runner) = effects::mount(&canvas, effect, motion) {
            register(Mounted::Effect(runner));
        }
    }

    if let Some(view) = carousel_view::mount(&document, motion) {
        register(Mounted::Carousel(view));
    }

    if let Some(view) = contact_view::mount(&document) {
        register(Mounted::Contact(view));
    }

    Ok(())
}

/// Tear down every mounted component. Pending frame callbacks are cancelled
/// and resize/pointer listeners removed synchronously; leaving them behind
/// on a detached page is a correctness bug, not a performance nit.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|m| m.borrow_mut().clear());
    log::info!("site-web unmounted");
}
