//! Browser host.
//!
//! Wires DOM listeners to [`PageCore`] and applies the effects it returns.
//! Every lookup that comes back empty is skipped without logging: pages
//! that lack a modal, a form, or any animated section simply don't get that
//! behavior. Failed browser calls on elements that do exist are logged at
//! debug level.
//!
//! BORROWS
//! =======
//! The core sits in a `RefCell`. Handlers borrow it only long enough to get
//! the effect list, then apply the effects with the borrow released, so a
//! callback fired while effects are being applied can borrow again.

mod apply;
mod wire;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, IntersectionObserver};

use crate::audience::Audience;
use crate::config::Config;
use crate::consts::SUBMIT_SELECTOR;
use crate::error::PageError;
use crate::page::PageCore;

pub(crate) struct Host {
    core: RefCell<PageCore>,
    document: Document,
    /// Animated elements, indexed by `RevealId`.
    reveal_targets: RefCell<Vec<Element>>,
    observer: RefCell<Option<IntersectionObserver>>,
}

impl Host {
    fn new(document: Document, config: Config) -> Self {
        Self {
            core: RefCell::new(PageCore::new(config)),
            document,
            reveal_targets: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
        }
    }

    fn modal(&self, audience: Audience) -> Option<Element> {
        self.document.get_element_by_id(audience.modal_id())
    }

    fn form(&self, audience: Audience) -> Option<HtmlFormElement> {
        self.document
            .get_element_by_id(audience.form_id())
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
    }

    fn submit_button(&self, audience: Audience) -> Option<HtmlButtonElement> {
        let form = self.form(audience)?;
        query_one(&form, SUBMIT_SELECTOR).and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned())
    }
}

/// Wire the page once the DOM is parsed, or right away if it already is.
pub fn on_ready(config: Config) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let host = Rc::new(Host::new(document.clone(), config));
    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(move || wire::wire(&host));
        check(
            "DOMContentLoaded listener",
            document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref()),
        );
    } else {
        wire::wire(&host);
    }
}

// --- Helpers ---

fn js_error(err: &JsValue) -> PageError {
    PageError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Log a failed browser call.
fn check<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::debug!("{context}: {}", js_error(&err));
    }
}

/// All elements under `root` matching `selector`. Invalid selectors match
/// nothing.
fn query_all(root: &JsValue, selector: &str) -> Vec<Element> {
    let list = if let Some(doc) = root.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = root.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn query_one(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(_) => None,
    }
}

fn set_display(root: &Element, selector: &str, value: &str) {
    if let Some(el) = query_one(root, selector).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) {
        check("set display", el.style().set_property("display", value));
    }
}
