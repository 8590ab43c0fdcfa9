//! Contact form: validation and the simulated send.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use super::dom::{query, query_in};
use super::tasks::{listen, Timeout};
use crate::form::{ContactFields, SubmitState, SENDING_LABEL, SENT};

/// Where user-facing notices go. The page uses `window.alert`.
pub type Notifier = Rc<dyn Fn(&str)>;

pub fn alert_notifier() -> Notifier {
    Rc::new(|message: &str| {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    })
}

/// Live state of the mounted form.
pub struct ContactForm {
    form: HtmlFormElement,
    state: Rc<RefCell<SubmitState>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ContactForm {
    /// Hooks `.contact-form`. `Ok(None)` when the page has no form.
    pub fn mount(document: &Document, delay_ms: i32, notify: Notifier) -> Result<Option<Self>, JsValue> {
        let Some(form) = query::<HtmlFormElement>(document, ".contact-form") else {
            log::debug!(".contact-form not on this page, skipping");
            return Ok(None);
        };

        let state = Rc::new(RefCell::new(SubmitState::Idle));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        {
            let target = form.clone();
            let form = form.clone();
            let state = state.clone();
            let pending = pending.clone();
            listen(&target, "submit", move |event| {
                event.prevent_default();

                if let Err(e) = read_fields(&form).validate() {
                    log::debug!("contact form rejected: {e:?}");
                    notify(&e.to_string());
                    return;
                }

                let button = submit_button(&form);
                let label = button
                    .as_ref()
                    .and_then(|b| b.text_content())
                    .unwrap_or_default();
                if !state.borrow_mut().begin(label) {
                    log::debug!("contact form already sending");
                    return;
                }
                if let Some(b) = &button {
                    b.set_text_content(Some(SENDING_LABEL));
                    b.set_disabled(true);
                }

                let done = {
                    let form = form.clone();
                    let state = state.clone();
                    let notify = notify.clone();
                    move || {
                        notify(SENT);
                        form.reset();
                        if let (Some(label), Some(b)) = (state.borrow_mut().finish(), button) {
                            restore(&b, &label);
                        }
                    }
                };
                match Timeout::schedule(delay_ms, done) {
                    Ok(t) => *pending.borrow_mut() = Some(t),
                    Err(e) => log::error!("could not schedule send: {e:?}"),
                }
            })?;
        }

        log::debug!("contact form ready");
        Ok(Some(Self { form, state, pending }))
    }

    pub fn is_sending(&self) -> bool {
        self.state.borrow().is_sending()
    }

    /// Drops any in-flight send and puts the button back so the form can be
    /// submitted again.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        let Some(label) = self.state.borrow_mut().finish() else { return };
        if let Some(b) = submit_button(&self.form) {
            restore(&b, &label);
        }
        log::debug!("pending contact form send cancelled");
    }
}

fn submit_button(form: &Element) -> Option<HtmlButtonElement> {
    query_in::<HtmlButtonElement>(form, "button[type=\"submit\"]")
}

fn restore(button: &HtmlButtonElement, label: &str) {
    button.set_text_content(Some(label));
    button.set_disabled(false);
}

fn value_of(form: &Element, selector: &str) -> Option<String> {
    let el = form.query_selector(selector).ok().flatten()?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

fn read_fields(form: &Element) -> ContactFields {
    ContactFields {
        name: value_of(form, "input[type=\"text\"]"),
        email: value_of(form, "input[type=\"email\"]"),
        subject: value_of(form, "input[placeholder=\"Subject\"]"),
        message: value_of(form, "textarea"),
    }
}
