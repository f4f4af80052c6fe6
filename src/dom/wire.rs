//! Listener registration.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, FormData, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Host, check, js_error, query_all};
use crate::audience::Audience;
use crate::consts::{ANCHOR_SELECTOR, CLOSE_SELECTOR, OVERLAY_SELECTOR, REVEAL_SELECTOR};
use crate::reveal::RevealId;

pub(super) fn wire(host: &Rc<Host>) {
    wire_reveal(host);
    wire_links(host);
    wire_modals(host);
    wire_forms(host);
    log::debug!("page wired");
}

/// Attach a listener that lives as long as the page.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    check(event, target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()));
    cb.forget();
}

fn wire_reveal(host: &Rc<Host>) {
    let targets = query_all(host.document.as_ref(), REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let host_cb = Rc::clone(host);
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = host_cb.reveal_targets.borrow().iter().position(|el| *el == target) else {
                    continue;
                };
                let effects = host_cb.core.borrow_mut().on_intersection(RevealId(index), entry.is_intersecting());
                host_cb.apply(effects);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    {
        let core = host.core.borrow();
        options.set_root_margin(&core.config.reveal.root_margin);
        options.set_threshold(&JsValue::from_f64(core.config.reveal.threshold));
    }
    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("reveal disabled: {}", js_error(&err));
            return;
        }
    };
    cb.forget();

    {
        let mut core = host.core.borrow_mut();
        for (index, el) in targets.iter().enumerate() {
            core.register_reveal(RevealId(index));
            observer.observe(el);
        }
    }
    log::debug!("observing {} reveal targets", targets.len());
    *host.reveal_targets.borrow_mut() = targets;
    *host.observer.borrow_mut() = Some(observer);
}

fn wire_links(host: &Rc<Host>) {
    for link in query_all(host.document.as_ref(), ANCHOR_SELECTOR) {
        let host = Rc::clone(host);
        let link_for_cb = link.clone();
        listen(&link, "click", move |event| {
            event.prevent_default();
            let href = link_for_cb.get_attribute("href").unwrap_or_default();
            let effects = host.core.borrow_mut().on_link_click(&href);
            host.apply(effects);
        });
    }
}

fn wire_modals(host: &Rc<Host>) {
    for overlay in query_all(host.document.as_ref(), OVERLAY_SELECTOR) {
        let Some(audience) = Audience::from_modal_id(&overlay.id()) else {
            continue;
        };

        for button in query_all(overlay.as_ref(), CLOSE_SELECTOR) {
            let host = Rc::clone(host);
            listen(&button, "click", move |_| {
                let effects = host.core.borrow_mut().close_modal(audience);
                host.apply(effects);
            });
        }

        let host = Rc::clone(host);
        let overlay_js: JsValue = overlay.clone().into();
        listen(&overlay, "click", move |event| {
            let on_background = event.target().is_some_and(|t| JsValue::from(t) == overlay_js);
            let effects = host.core.borrow_mut().on_overlay_click(audience, on_background);
            host.apply(effects);
        });
    }
}

fn wire_forms(host: &Rc<Host>) {
    for audience in Audience::ALL {
        let Some(form) = host.form(audience) else {
            continue;
        };
        let host = Rc::clone(host);
        let form_for_cb = form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let label = host.submit_button(audience).map(|b| b.inner_text()).unwrap_or_default();
            let fields = form_fields(&form_for_cb);
            let result = host.core.borrow_mut().on_submit(audience, label, fields);
            match result {
                Ok(effects) => host.apply(effects),
                Err(err) => log::error!("{} submit failed: {err}", audience.form_id()),
            }
        });
    }
}

/// Text fields of `form` in document order. File inputs are skipped.
fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(err) => {
            log::debug!("form data unavailable: {}", js_error(&err));
            return Vec::new();
        }
    };
    let mut fields = Vec::new();
    for entry in data.entries() {
        let Ok(entry) = entry else {
            continue;
        };
        let pair: js_sys::Array = entry.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    fields
}
