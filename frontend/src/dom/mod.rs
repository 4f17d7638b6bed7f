//! Browser bindings. Each submodule looks up its elements, wires listeners to
//! a state machine from `widgets`/`utils`, and renders what that reports.

pub mod carousel;
pub mod chat;
pub mod effects;
pub mod form;
pub mod images;
pub mod listener;
pub mod menu;
pub mod page;
pub mod slideshow;
pub mod timers;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::error::MountError;

pub const ACTIVE_CLASS: &str = "active";

/// Listeners and observers one page feature keeps alive. Dropping it
/// detaches the feature.
#[derive(Default)]
pub struct Bindings {
    pub listeners: Vec<listener::Listener>,
    pub observers: Vec<listener::Observer>,
}

impl Bindings {
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.observers.is_empty()
    }
}

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or_else(|| MountError::Js("no window".to_string()))
}

pub fn document() -> Result<Document, MountError> {
    window()?
        .document()
        .ok_or_else(|| MountError::Js("no document".to_string()))
}

pub fn query(selector: &'static str) -> Result<Element, MountError> {
    document()?
        .query_selector(selector)?
        .ok_or(MountError::MissingElement(selector))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(id: &'static str) -> Result<Element, MountError> {
    document()?
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Marks exactly the element at `active` and clears every other one, in a
/// single pass over the list.
pub fn mark_active(elements: &[Element], active: usize) {
    for (i, element) in elements.iter().enumerate() {
        set_class(element, ACTIVE_CLASS, i == active);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn key_of(event: &Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|event| event.key())
}

/// `clientX` of the first touch point in `touches` or `changedTouches`.
pub fn touch_x(event: &Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<web_sys::TouchEvent>()?;
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.get(0).map(|touch| f64::from(touch.client_x()))
}
