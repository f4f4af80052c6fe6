//! Applying core effects to the document.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::JsCast;

use super::{Host, check, query_one, set_display};
use crate::audience::Audience;
use crate::consts::{CONTAINER_SELECTOR, CONTENT_SELECTOR, OPEN_CLASS, SUCCESS_SELECTOR, VISIBLE_CLASS};
use crate::effect::Effect;
use crate::form::{SubmitPlan, Submission};
use crate::reveal::RevealId;
use crate::transport::{self, BrowserTransport};

impl Host {
    pub(super) fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Reveal(id) => self.reveal(id),
                Effect::ScrollTo(selector) => self.scroll_to(&selector),
                Effect::SetModalOpen { audience, open } => self.set_modal_open(audience, open),
                Effect::ScrollLock(locked) => self.scroll_lock(locked),
                Effect::ScheduleReset { ticket, delay_ms } => {
                    let host = Rc::clone(self);
                    Timeout::new(delay_ms, move || {
                        let effects = host.core.borrow_mut().on_reset_due(&ticket);
                        host.apply(effects);
                    })
                    .forget();
                }
                Effect::ResetModal(audience) => self.reset_modal(audience),
                Effect::SetSubmitButton { audience, label, disabled } => {
                    if let Some(button) = self.submit_button(audience) {
                        button.set_inner_text(&label);
                        button.set_disabled(disabled);
                    }
                }
                Effect::ShowSuccess(audience) => self.show_success(audience),
                Effect::Alert(message) => {
                    if let Some(window) = web_sys::window() {
                        check("alert", window.alert_with_message(&message));
                    }
                }
                Effect::Dispatch { submission, plan } => self.dispatch(submission, plan),
            }
        }
    }

    fn reveal(&self, id: RevealId) {
        let targets = self.reveal_targets.borrow();
        let Some(el) = targets.get(id.0) else {
            return;
        };
        check("reveal", el.class_list().add_1(VISIBLE_CLASS));
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer.unobserve(el);
        }
    }

    fn scroll_to(&self, selector: &str) {
        // Hrefs that are not valid selectors are treated like missing targets.
        let Ok(Some(el)) = self.document.query_selector(selector) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn set_modal_open(&self, audience: Audience, open: bool) {
        let Some(modal) = self.modal(audience) else {
            return;
        };
        let classes = modal.class_list();
        if open {
            check("open modal", classes.add_1(OPEN_CLASS));
        } else {
            check("close modal", classes.remove_1(OPEN_CLASS));
        }
    }

    fn scroll_lock(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let value = if locked { "hidden" } else { "" };
            check("scroll lock", body.style().set_property("overflow", value));
        }
    }

    fn reset_modal(&self, audience: Audience) {
        let Some(modal) = self.modal(audience) else {
            return;
        };
        if let Some(form) = query_one(&modal, "form").and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned()) {
            form.reset();
        }
        set_display(&modal, CONTENT_SELECTOR, "block");
        set_display(&modal, SUCCESS_SELECTOR, "none");
    }

    fn show_success(&self, audience: Audience) {
        let Some(form) = self.form(audience) else {
            return;
        };
        let container = match form.closest(CONTAINER_SELECTOR) {
            Ok(Some(container)) => container,
            _ => return,
        };
        set_display(&container, CONTENT_SELECTOR, "none");
        set_display(&container, SUCCESS_SELECTOR, "block");
    }

    fn dispatch(self: &Rc<Self>, submission: Submission, plan: SubmitPlan) {
        let host = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = transport::execute(&BrowserTransport, &plan).await;
            let effects = host.core.borrow_mut().on_dispatch_complete(submission, &outcome);
            host.apply(effects);
        });
    }
}
