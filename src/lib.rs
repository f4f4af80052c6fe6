//! Page behavior for the marketing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It reveals
//! sections as they scroll into view, smooth-scrolls in-page links, drives
//! the clinic and partner signup modals, and posts the signup forms to a
//! webhook. All decisions live in [`page::PageCore`], which answers each DOM
//! event with a list of [`effect::Effect`]s; the `dom` host (behind the
//! `browser` feature) wires listeners and applies those effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Testable [`page::PageCore`] tying the units together |
//! | [`effect`] | Effects the host applies to the document |
//! | [`reveal`] | Reveal-on-scroll bookkeeping |
//! | [`anchor`] | Fragment link classification |
//! | [`modal`] | Modal stack, scroll lock, deferred reset |
//! | [`form`] | Submission lifecycle and webhook payload |
//! | [`transport`] | Dispatch outcomes and the browser transport |
//! | [`schedule`] | Cancellable keyed timers |
//! | [`audience`] | Clinic / partner identities and their element ids |
//! | [`config`] | Compile-time configuration |
//! | [`consts`] | Selectors, classes, delays, copy |
//! | [`error`] | Error types |

pub mod anchor;
pub mod audience;
pub mod config;
pub mod consts;
#[cfg(feature = "browser")]
pub mod dom;
pub mod effect;
pub mod error;
pub mod form;
pub mod modal;
pub mod page;
pub mod reveal;
pub mod schedule;
pub mod transport;

/// WASM entry point: install logging and wire the page once the DOM is ready.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    dom::on_ready(config::Config::default());
}
