use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use super::listener::Listener;
use super::{by_id, document, query, query_all, set_class, set_style, Bindings, ACTIVE_CLASS};
use crate::error::MountError;
use crate::utils::effects::{focus_trap_target, hamburger_bar_styles};

const TOGGLE: &str = ".mobile-menu-toggle";
const NAV: &str = "mobile-nav";
const NAV_LINKS: &str = ".mobile-nav a";
const FOCUSABLE: &str = "a[href], area[href], input:not([disabled]), select:not([disabled]), \
    textarea:not([disabled]), button:not([disabled]), iframe, object, embed, [tabindex=\"0\"], \
    [contenteditable]";

struct Menu {
    open: Cell<bool>,
    toggle: Element,
    nav: Element,
}

impl Menu {
    fn set_open(&self, open: bool) {
        self.open.set(open);
        set_class(&self.nav, ACTIVE_CLASS, open);
        set_class(&self.toggle, ACTIVE_CLASS, open);
        let bars = self.toggle.query_selector_all("span");
        if let Ok(bars) = bars {
            for (i, (property, value)) in hamburger_bar_styles(open).into_iter().enumerate() {
                if let Some(bar) = bars.item(i as u32).and_then(|n| n.dyn_into::<Element>().ok()) {
                    set_style(&bar, property, value);
                }
            }
        }
    }

    /// Keeps Tab and Shift+Tab cycling inside the open menu.
    fn trap_focus(&self, event: &KeyboardEvent) {
        let focusable: Vec<HtmlElement> = self
            .nav
            .query_selector_all(FOCUSABLE)
            .map(|nodes| {
                (0..nodes.length())
                    .filter_map(|i| nodes.item(i))
                    .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
                    .collect()
            })
            .unwrap_or_default();
        let active = document().ok().and_then(|doc| doc.active_element());
        let current = active.and_then(|active| {
            focusable.iter().position(|el| {
                let el: &Element = el;
                *el == active
            })
        });
        if let Some(target) = focus_trap_target(focusable.len(), current, event.shift_key()) {
            let _ = focusable[target].focus();
            event.prevent_default();
        }
    }
}

/// Hamburger menu for small screens.
pub fn mount() -> Result<Bindings, MountError> {
    let menu = Rc::new(Menu {
        open: Cell::new(false),
        toggle: query(TOGGLE)?,
        nav: by_id(NAV)?,
    });
    let mut bindings = Bindings::default();

    {
        let menu = menu.clone();
        let toggle = menu.toggle.clone();
        bindings.listeners.push(Listener::new(&toggle, "click", move |_| {
            menu.set_open(!menu.open.get());
        }));
    }
    for link in query_all(NAV_LINKS) {
        let menu = menu.clone();
        bindings.listeners.push(Listener::new(&link, "click", move |_| {
            menu.set_open(false);
        }));
    }
    bindings.listeners.push(Listener::new(&document()?, "keydown", move |e| {
        let Some(event) = e.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !menu.open.get() {
            return;
        }
        match event.key().as_str() {
            "Escape" => menu.set_open(false),
            "Tab" => menu.trap_focus(event),
            _ => {}
        }
    }));
    Ok(bindings)
}
