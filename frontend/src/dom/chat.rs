use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, Node};

use super::listener::Listener;
use super::{by_id, document, key_of, set_class, window, ACTIVE_CLASS};
use crate::config::SiteConfig;
use crate::error::MountError;
use crate::widgets::chat::{ChatEffect, ChatWidget};

const TOGGLE: &str = "whatsapp-toggle";
const PANEL: &str = "whatsapp-chat";
const INPUT: &str = "chat-input";
const SEND: &str = "chat-send";

struct Shared {
    chat: RefCell<ChatWidget>,
    toggle: Element,
    panel: Element,
    input: HtmlInputElement,
    pending_focus: RefCell<Option<Timeout>>,
}

impl Shared {
    fn update(&self, f: impl FnOnce(&mut ChatWidget) -> Vec<ChatEffect>) {
        let effects = {
            let mut chat = self.chat.borrow_mut();
            f(&mut *chat)
        };
        for effect in effects {
            self.apply(effect);
        }
    }

    fn send(&self) {
        let draft = self.input.value();
        self.update(|chat| {
            chat.set_draft(draft);
            chat.send()
        });
    }

    fn apply(&self, effect: ChatEffect) {
        match effect {
            ChatEffect::ShowPanel => set_class(&self.panel, ACTIVE_CLASS, true),
            ChatEffect::HidePanel => {
                set_class(&self.panel, ACTIVE_CLASS, false);
                self.pending_focus.borrow_mut().take();
            }
            ChatEffect::FocusInput { delay_ms } => {
                let input = self.input.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    let _ = input.focus();
                });
                *self.pending_focus.borrow_mut() = Some(timeout);
            }
            ChatEffect::OpenLink(url) => {
                if let Ok(window) = window() {
                    if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                        log::warn!("Failed to open chat link: {:?}", e);
                    }
                }
            }
            ChatEffect::ClearInput => self.input.set_value(""),
        }
    }

    fn contains(&self, target: Option<&Node>) -> bool {
        self.toggle.contains(target) || self.panel.contains(target)
    }
}

/// Mounted chat widget. Dropping it cancels a pending focus and detaches
/// every listener.
pub struct ChatWidgetHandle {
    listeners: Vec<Listener>,
    shared: Rc<Shared>,
}

impl Drop for ChatWidgetHandle {
    fn drop(&mut self) {
        self.listeners.clear();
        self.shared.pending_focus.borrow_mut().take();
    }
}

pub fn mount(config: &SiteConfig) -> Result<ChatWidgetHandle, MountError> {
    let toggle = by_id(TOGGLE)?;
    let panel = by_id(PANEL)?;
    let input = by_id(INPUT)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| MountError::MissingElement(INPUT))?;

    let shared = Rc::new(Shared {
        chat: RefCell::new(ChatWidget::new(&config.chat)),
        toggle,
        panel,
        input,
        pending_focus: RefCell::new(None),
    });

    let mut listeners = Vec::new();
    {
        let shared = shared.clone();
        listeners.push(Listener::new(&shared.toggle.clone(), "click", move |e| {
            e.prevent_default();
            shared.update(ChatWidget::toggle);
        }));
    }
    if let Ok(send) = by_id(SEND) {
        let shared = shared.clone();
        listeners.push(Listener::new(&send, "click", move |_| shared.send()));
    }
    {
        let shared = shared.clone();
        listeners.push(Listener::new(&shared.input.clone(), "input", move |_| {
            let value = shared.input.value();
            shared.chat.borrow_mut().set_draft(value);
        }));
    }
    {
        let shared = shared.clone();
        listeners.push(Listener::new(&shared.input.clone(), "keypress", move |e| {
            if key_of(&e).as_deref() == Some("Enter") {
                shared.send();
            }
        }));
    }

    let doc = document()?;
    {
        let shared = shared.clone();
        listeners.push(Listener::new(&doc, "click", move |e| {
            if !shared.chat.borrow().is_open() {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !shared.contains(target.as_ref()) {
                shared.update(ChatWidget::outside_click);
            }
        }));
    }
    {
        let shared = shared.clone();
        listeners.push(Listener::new(&doc, "keydown", move |e| {
            if key_of(&e).as_deref() == Some("Escape") {
                shared.update(ChatWidget::escape);
            }
        }));
    }

    log::debug!("Chat widget mounted");
    Ok(ChatWidgetHandle { listeners, shared })
}
