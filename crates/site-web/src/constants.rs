// Element ids and the shared palette used by the canvas painters.

pub const GRAPH_CANVAS_ID: &str = "graph-canvas";
pub const CIRCUIT_CANVAS_ID: &str = "circuit-canvas";
pub const CAROUSEL_ID: &str = "portfolio-carousel";

pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";

// Gold and sky-blue from the design tokens, as rgba() strings.

#[inline]
pub fn gold(alpha: f32) -> String {
    format!("rgba(212, 175, 55, {:.3})", alpha.clamp(0.0, 1.0))
}

#[inline]
pub fn sky(alpha: f32) -> String {
    format!("rgba(56, 189, 248, {:.3})", alpha.clamp(0.0, 1.0))
}
