use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Match the canvas backing resolution to its CSS size times the device
/// pixel ratio, then rescale the context so drawing stays in CSS-pixel
/// coordinates. Setting width/height resets the context transform, so the
/// rescale must follow every resize. Returns the CSS size.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let _ = ctx.scale(dpr, dpr);
    (rect.width(), rect.height())
}

/// Listener registration that removes itself on drop. Components hold these
/// so unmounting detaches every handler they added.
pub struct EventHook {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventHook {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    /// Attach to the window itself (resize and friends).
    pub fn attach_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let w = web::window()?;
        Some(Self::attach(w.as_ref(), event, handler))
    }
}

impl Drop for EventHook {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
