use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::listener::Listener;
use super::{document, mark_active, query, query_all};
use crate::config::SiteConfig;
use crate::error::MountError;
use crate::widgets::carousel::Carousel;
use crate::widgets::swipe::SwipeTracker;

const CARDS: &str = ".testimonial-card";
const NEXT: &str = ".next-btn";
const PREV: &str = ".prev-btn";
const REGION: &str = ".testimonials";
const SLIDER: &str = ".testimonials-slider";

struct Shared {
    carousel: RefCell<Carousel>,
    cards: Vec<Element>,
}

impl Shared {
    fn navigate(&self, f: impl FnOnce(&mut Carousel) -> Option<usize>) {
        let moved = {
            let mut carousel = self.carousel.borrow_mut();
            f(&mut *carousel)
        };
        if let Some(index) = moved {
            mark_active(&self.cards, index);
        }
    }
}

/// Mounted testimonial slider. Dropping it detaches every listener.
pub struct CarouselWidget {
    _listeners: Vec<Listener>,
}

pub fn mount(config: &SiteConfig) -> Result<CarouselWidget, MountError> {
    let cards = query_all(CARDS);
    if cards.is_empty() {
        return Err(MountError::NoPanels(CARDS));
    }
    let shared = Rc::new(Shared {
        carousel: RefCell::new(Carousel::new(cards.len())),
        cards,
    });
    shared.navigate(|carousel| carousel.go_to(0));

    let mut listeners = Vec::new();

    if let Ok(next) = query(NEXT) {
        let shared = shared.clone();
        listeners.push(Listener::new(&next, "click", move |_| {
            shared.navigate(Carousel::next);
        }));
    }
    if let Ok(prev) = query(PREV) {
        let shared = shared.clone();
        listeners.push(Listener::new(&prev, "click", move |_| {
            shared.navigate(Carousel::prev);
        }));
    }

    let doc = document()?;
    {
        let shared = shared.clone();
        let doc_for_focus = doc.clone();
        listeners.push(Listener::new(&doc, "keydown", move |e| {
            let Some(key) = super::key_of(&e) else {
                return;
            };
            let focus_within = doc_for_focus
                .active_element()
                .and_then(|el| el.closest(REGION).ok().flatten())
                .is_some();
            shared.navigate(|carousel| carousel.key(&key, focus_within));
        }));
    }

    if let Ok(slider) = query(SLIDER) {
        let tracker = Rc::new(RefCell::new(SwipeTracker::new(config.swipe_threshold)));
        {
            let tracker = tracker.clone();
            listeners.push(Listener::new(&slider, "touchstart", move |e| {
                if let Some(x) = super::touch_x(&e, false) {
                    tracker.borrow_mut().begin(x);
                }
            }));
        }
        let shared = shared.clone();
        listeners.push(Listener::new(&slider, "touchend", move |e| {
            let swipe = super::touch_x(&e, true).and_then(|x| tracker.borrow_mut().finish(x));
            if let Some(swipe) = swipe {
                shared.navigate(|carousel| carousel.swipe(swipe));
            }
        }));
    }

    log::debug!("Testimonial carousel mounted with {} cards", shared.cards.len());
    Ok(CarouselWidget {
        _listeners: listeners,
    })
}
