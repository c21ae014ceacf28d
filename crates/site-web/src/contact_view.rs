//! Contact form wiring and the simulated submission backend.
//!
//! The submission contract is `{ success, message, error? }` from an async
//! call; the UI never crashes on a rejection, surfaces the message, and
//! after three consecutive failures swaps the retry affordance for a static
//! "contact us directly" line. One submission in flight at a time; the
//! submit control is disabled while pending.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{
    sanitize, simulated_response, validate, ContactError, ContactFormData, SubmissionFlow,
    SubmissionPhase,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::{
    CONTACT_EMAIL_ID, CONTACT_MESSAGE_ID, CONTACT_NAME_ID, CONTACT_STATUS_ID, CONTACT_SUBMIT_ID,
};
use crate::dom::EventHook;

const SENDING_MESSAGE: &str = "Envoi en cours...";
const UNAVAILABLE_MESSAGE: &str =
    "Impossible d'envoyer votre message pour le moment. Contactez-nous directement à contact@aureoncapital.com.";

pub struct ContactView {
    _hooks: Vec<EventHook>,
}

struct FormElements {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    submit: web::HtmlButtonElement,
    status: web::HtmlElement,
}

impl FormElements {
    fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            name: document
                .get_element_by_id(CONTACT_NAME_ID)?
                .dyn_into()
                .ok()?,
            email: document
                .get_element_by_id(CONTACT_EMAIL_ID)?
                .dyn_into()
                .ok()?,
            message: document
                .get_element_by_id(CONTACT_MESSAGE_ID)?
                .dyn_into()
                .ok()?,
            submit: document
                .get_element_by_id(CONTACT_SUBMIT_ID)?
                .dyn_into()
                .ok()?,
            status: document
                .get_element_by_id(CONTACT_STATUS_ID)?
                .dyn_into()
                .ok()?,
        })
    }

    fn read(&self) -> ContactFormData {
        ContactFormData {
            nom: self.name.value(),
            email: self.email.value(),
            message: self.message.value(),
        }
    }

    fn clear_fields(&self) {
        self.name.set_value("");
        self.email.set_value("");
        self.message.set_value("");
    }

    fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }
}

/// Resolve after `ms` milliseconds on the browser event loop.
async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub fn mount(document: &web::Document) -> Option<ContactView> {
    let elements = Rc::new(FormElements::find(document)?);
    let flow = Rc::new(RefCell::new(SubmissionFlow::new()));
    let mut hooks = Vec::new();

    {
        let submit_el = elements.submit.clone();
        let elements = elements.clone();
        let flow = flow.clone();
        hooks.push(EventHook::attach(
            submit_el.as_ref(),
            "click",
            move |ev| {
                ev.prevent_default();

                let data = sanitize(&elements.read());
                let errors = validate(&data);
                if let Some(first) = errors.first() {
                    elements.set_status(first);
                    return;
                }

                match flow.borrow_mut().begin() {
                    Ok(()) => {}
                    Err(ContactError::AlreadySubmitting) => return,
                    Err(ContactError::Unavailable) => {
                        elements.set_status(UNAVAILABLE_MESSAGE);
                        elements.submit.set_disabled(true);
                        return;
                    }
                }

                elements.submit.set_disabled(true);
                elements.set_status(SENDING_MESSAGE);

                let elements = elements.clone();
                let flow = flow.clone();
                spawn_local(async move {
                    // simulated network latency, 1500-2500 ms
                    let delay = 1500 + (js_sys::Math::random() * 1000.0) as i32;
                    sleep_ms(delay).await;

                    let outcome = simulated_response(&data, js_sys::Math::random());
                    let phase = {
                        let mut flow = flow.borrow_mut();
                        flow.complete(&outcome);
                        flow.phase()
                    };

                    match phase {
                        SubmissionPhase::Succeeded => {
                            log::info!("[contact] submission accepted");
                            elements.set_status(&outcome.message);
                            elements.clear_fields();
                            elements.submit.set_disabled(false);

                            // success notice auto-clears after 5 s
                            let elements = elements.clone();
                            let flow = flow.clone();
                            spawn_local(async move {
                                sleep_ms(5000).await;
                                let mut flow = flow.borrow_mut();
                                if flow.phase() == SubmissionPhase::Succeeded {
                                    flow.reset_notice();
                                    elements.set_status("");
                                }
                            });
                        }
                        SubmissionPhase::Failed { attempts } => {
                            log::warn!("[contact] submission failed, attempt {attempts}");
                            let detail =
                                outcome.error.as_deref().unwrap_or(outcome.message.as_str());
                            elements.set_status(detail);
                            // retry only by explicit user action
                            elements.submit.set_disabled(false);
                        }
                        SubmissionPhase::Unavailable => {
                            log::warn!("[contact] retry cap reached; switching to static contact");
                            elements.set_status(UNAVAILABLE_MESSAGE);
                            elements.submit.set_disabled(true);
                        }
                        _ => {}
                    }
                });
            },
        ));
    }

    Some(ContactView { _hooks: hooks })
}
