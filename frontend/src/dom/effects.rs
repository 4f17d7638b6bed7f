use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::listener::{Listener, Observer};
use super::{by_id, document, query, query_all, set_class, set_style, window, Bindings};
use crate::config::SiteConfig;
use crate::error::MountError;
use crate::utils::effects::{
    anchor_scroll_top, anchor_selector, counter_target, float_delay, fully_in_viewport,
    header_is_scrolled, parallax_offset, social_link_label, CounterAnimation, CounterFrame, Rect,
    COUNTER_FRAME_MS,
};

const HEADER: &str = "header";
const STATS_SECTION: &str = ".stats-counter";
const HERO_STATS: &str = ".hero .stat-number";
const HERO_BACKGROUND: &str = ".hero-background";
const SERVICE_CARDS: &str = ".service-card";
const REVEAL_TARGETS: &str = ".service-card, .before-after-card, .contact-item, .testimonial-card";
const PRELOADER: &str = ".preloader";

fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Compact header once the page has scrolled past the configured offset.
/// Updates are coalesced to one per animation frame.
pub fn header(config: &SiteConfig) -> Result<Bindings, MountError> {
    let header = by_id(HEADER)?;
    let win = window()?;
    let offset = config.header_scroll_offset;
    let ticking = Rc::new(Cell::new(false));

    let update: Rc<dyn Fn()> = {
        let ticking = ticking.clone();
        Rc::new(move || {
            set_class(&header, "scrolled", header_is_scrolled(scroll_y(), offset));
            ticking.set(false);
        })
    };
    update();

    let listener = Listener::new(&win, "scroll", move |_| {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        let update = update.clone();
        let frame = Closure::once_into_js(move || update());
        let requested = window()
            .map(|w| w.request_animation_frame(frame.unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !requested {
            ticking.set(false);
        }
    });
    Ok(Bindings {
        listeners: vec![listener],
        ..Bindings::default()
    })
}

pub fn parallax(config: &SiteConfig) -> Result<Bindings, MountError> {
    let background = query(HERO_BACKGROUND)?;
    let speed = config.parallax_speed;
    let listener = Listener::new(&window()?, "scroll", move |_| {
        let offset = parallax_offset(scroll_y(), speed);
        set_style(&background, "transform", &format!("translateY({}px)", offset));
    });
    Ok(Bindings {
        listeners: vec![listener],
        ..Bindings::default()
    })
}

fn element_fully_visible(element: &Element) -> bool {
    let Ok(win) = window() else {
        return false;
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    fully_in_viewport(
        Rect {
            top: rect.top(),
            left: rect.left(),
            bottom: rect.bottom(),
            right: rect.right(),
        },
        width,
        height,
    )
}

struct Counters {
    started: Cell<bool>,
    running: RefCell<Vec<Rc<RefCell<Option<Interval>>>>>,
}

impl Counters {
    fn start(&self) {
        self.started.set(true);
        for stat in query_all(HERO_STATS) {
            let (target, generated) =
                counter_target(stat.get_attribute("data-target").as_deref(), Math::random());
            if generated {
                let _ = stat.set_attribute("data-target", &target.to_string());
            }

            let slot = Rc::new(RefCell::new(None));
            let weak: Weak<RefCell<Option<Interval>>> = Rc::downgrade(&slot);
            let mut counter = CounterAnimation::new(target);
            let interval = Interval::new(COUNTER_FRAME_MS, move || match counter.step() {
                CounterFrame::Running(text) => stat.set_text_content(Some(&text)),
                CounterFrame::Done(text) => {
                    stat.set_text_content(Some(&text));
                    if let Some(slot) = weak.upgrade() {
                        slot.borrow_mut().take();
                    }
                }
            });
            *slot.borrow_mut() = Some(interval);
            self.running.borrow_mut().push(slot);
        }
    }
}

/// Counts the hero stats up the first time the stats strip is fully visible.
pub fn stats_counters() -> Result<Bindings, MountError> {
    let section = query(STATS_SECTION)?;
    let counters = Rc::new(Counters {
        started: Cell::new(false),
        running: RefCell::new(Vec::new()),
    });

    let check = move || {
        if !counters.started.get() && element_fully_visible(&section) {
            counters.start();
        }
    };
    check();

    let listener = Listener::new(&window()?, "scroll", move |_| check());
    Ok(Bindings {
        listeners: vec![listener],
        ..Bindings::default()
    })
}

/// In-page anchors scroll smoothly, leaving room for the fixed header.
pub fn smooth_scrolling() -> Result<Bindings, MountError> {
    let doc = document()?;
    let mut bindings = Bindings::default();
    for link in query_all(r##"a[href^="#"]"##) {
        let doc = doc.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        bindings.listeners.push(Listener::new(&link, "click", move |e| {
            e.prevent_default();
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            let Some(section) = doc
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let header_height = doc
                .get_element_by_id(HEADER)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| f64::from(el.offset_height()))
                .unwrap_or(0.0);
            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(f64::from(section.offset_top()), header_height));
            options.set_behavior(ScrollBehavior::Smooth);
            if let Ok(win) = window() {
                win.scroll_to_with_scroll_to_options(&options);
            }
        }));
    }
    Ok(bindings)
}

/// Cards and contact items slide up as they enter the viewport.
pub fn reveal_on_scroll() -> Result<Bindings, MountError> {
    let targets = query_all(REVEAL_TARGETS);
    if targets.is_empty() {
        return Err(MountError::MissingElement(REVEAL_TARGETS));
    }
    let observer = Observer::once_visible(0.1, Some("0px 0px -50px 0px"), |el| {
        set_class(el, "visible", true);
    })?;
    for el in &targets {
        set_class(el, "slide-up", true);
        observer.observe(el);
    }
    Ok(Bindings {
        observers: vec![observer],
        ..Bindings::default()
    })
}

/// Click flips a service card; hover makes it float.
pub fn service_cards() -> Result<Bindings, MountError> {
    let cards = query_all(SERVICE_CARDS);
    if cards.is_empty() {
        return Err(MountError::MissingElement(SERVICE_CARDS));
    }
    let mut bindings = Bindings::default();
    for (index, card) in cards.into_iter().enumerate() {
        set_style(&card, "animation-delay", &float_delay(index));
        {
            let target = card.clone();
            bindings.listeners.push(Listener::new(&card, "click", move |_| {
                let _ = target.class_list().toggle("flipped");
            }));
        }
        {
            let target = card.clone();
            bindings.listeners.push(Listener::new(&card, "mouseenter", move |_| {
                set_style(&target, "animation", "floatAnimation 2s ease-in-out infinite");
            }));
        }
        let target = card.clone();
        bindings.listeners.push(Listener::new(&card, "mouseleave", move |_| {
            set_style(&target, "animation", "none");
        }));
    }
    Ok(bindings)
}

/// Fades the preloader out once everything has loaded.
pub fn preloader() -> Result<Bindings, MountError> {
    let preloader = query(PRELOADER)?;
    let hide: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let listener = Listener::new(&window()?, "load", move |_| {
        set_style(&preloader, "opacity", "0");
        let preloader = preloader.clone();
        *hide.borrow_mut() = Some(Timeout::new(500, move || {
            set_style(&preloader, "display", "none");
        }));
    });
    Ok(Bindings {
        listeners: vec![listener],
        ..Bindings::default()
    })
}

/// Screen reader labels for the icon-only contact links.
pub fn accessibility_labels() -> Result<Bindings, MountError> {
    if let Ok(button) = query(".whatsapp-btn") {
        let _ = button.set_attribute("aria-label", "Contact us via WhatsApp");
    }
    for link in query_all(".social-icons a") {
        let href = link.get_attribute("href").unwrap_or_default();
        let _ = link.set_attribute("aria-label", social_link_label(&href));
    }
    Ok(Bindings::default())
}

pub fn welcome_banner() {
    gloo_console::log!(
        "%c🎉 Raj Aesthetics Website Loaded Successfully! 🎉",
        "color: #d4a574; font-size: 16px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cBuilt with care for exceptional user experience",
        "color: #8b6f47; font-size: 12px;"
    );
}
