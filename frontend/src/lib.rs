//! Interactive behavior for the Raj Aesthetics landing page.
//!
//! The page is static HTML; this crate is loaded as a wasm module and attaches
//! the carousel, slideshow, chat widget and the smaller effects to markup that
//! is already there. State machines live in [`widgets`] and [`utils`] and
//! build on any target. The browser bindings are wasm-only.

pub mod config;
pub mod error;
pub mod utils;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::dom::effects::welcome_banner;
    use crate::dom::page::{load_config, Page};

    thread_local! {
        static PAGE: RefCell<Option<Page>> = RefCell::new(None);
    }

    fn mount_page() {
        let config = load_config();
        let page = Page::mount(&config);
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
        welcome_banner();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.ready_state() == "loading" {
            let on_ready = Closure::once_into_js(mount_page);
            let _ = document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
        } else {
            mount_page();
        }
    }

    /// Detaches every listener and cancels every timer the page set up.
    #[wasm_bindgen]
    pub fn teardown() {
        PAGE.with(|slot| slot.borrow_mut().take());
        log::info!("Page interactions torn down");
    }
}
