use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::Element;

use super::listener::Listener;
use super::timers::IntervalScheduler;
use super::{mark_active, query, query_all};
use crate::config::SiteConfig;
use crate::error::MountError;
use crate::widgets::slideshow::Slideshow;
use crate::widgets::swipe::SwipeTracker;

const SLIDES: &str = ".transformation-slide";
const INDICATORS: &str = ".indicator";
const NEXT: &str = ".next-slide";
const PREV: &str = ".prev-slide";
const CONTAINER: &str = ".slideshow-container";

struct Shared {
    show: RefCell<Slideshow<IntervalScheduler>>,
    slides: Vec<Element>,
    indicators: Vec<Element>,
}

impl Shared {
    fn navigate(&self, f: impl FnOnce(&mut Slideshow<IntervalScheduler>) -> Option<usize>) {
        let moved = {
            let mut show = self.show.borrow_mut();
            f(&mut *show)
        };
        if let Some(index) = moved {
            mark_active(&self.slides, index);
            mark_active(&self.indicators, index);
        }
    }
}

/// Mounted transformation slideshow. Dropping it stops autoplay and detaches
/// every listener.
pub struct SlideshowWidget {
    listeners: Vec<Listener>,
    shared: Rc<Shared>,
}

impl Drop for SlideshowWidget {
    fn drop(&mut self) {
        self.listeners.clear();
        self.shared.show.borrow_mut().unmount();
    }
}

pub fn mount(config: &SiteConfig) -> Result<SlideshowWidget, MountError> {
    let slides = query_all(SLIDES);
    if slides.is_empty() {
        return Err(MountError::NoPanels(SLIDES));
    }
    let indicators = query_all(INDICATORS);
    let interval_ms = config.slideshow.interval_ms;

    // The interval only holds a weak reference, so a late tick after
    // teardown finds nothing to advance.
    let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
        let weak = weak.clone();
        let scheduler = IntervalScheduler::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.navigate(Slideshow::tick);
            }
        });
        Shared {
            show: RefCell::new(Slideshow::new(slides.len(), interval_ms, scheduler)),
            slides,
            indicators,
        }
    });

    let mut listeners = Vec::new();

    if let Ok(next) = query(NEXT) {
        let shared = shared.clone();
        listeners.push(Listener::new(&next, "click", move |_| {
            shared.navigate(Slideshow::next);
        }));
    }
    if let Ok(prev) = query(PREV) {
        let shared = shared.clone();
        listeners.push(Listener::new(&prev, "click", move |_| {
            shared.navigate(Slideshow::prev);
        }));
    }
    for (index, indicator) in shared.indicators.iter().enumerate() {
        let shared = shared.clone();
        listeners.push(Listener::new(indicator, "click", move |_| {
            shared.navigate(|show| show.go_to(index));
        }));
    }

    if let Ok(container) = query(CONTAINER) {
        let tracker = Rc::new(RefCell::new(SwipeTracker::new(config.swipe_threshold)));
        {
            let tracker = tracker.clone();
            listeners.push(Listener::new(&container, "touchstart", move |e| {
                if let Some(x) = super::touch_x(&e, false) {
                    tracker.borrow_mut().begin(x);
                }
            }));
        }
        {
            let shared = shared.clone();
            listeners.push(Listener::new(&container, "touchend", move |e| {
                let swipe = super::touch_x(&e, true).and_then(|x| tracker.borrow_mut().finish(x));
                if let Some(swipe) = swipe {
                    shared.navigate(|show| show.swipe(swipe));
                }
            }));
        }
        {
            let shared = shared.clone();
            listeners.push(Listener::new(&container, "mouseenter", move |_| {
                shared.show.borrow_mut().pause();
            }));
        }
        {
            let shared = shared.clone();
            listeners.push(Listener::new(&container, "mouseleave", move |_| {
                shared.show.borrow_mut().resume();
            }));
        }
    }

    shared.navigate(Slideshow::mount);
    log::debug!(
        "Transformation slideshow mounted with {} slides, autoplay every {} ms",
        shared.slides.len(),
        interval_ms
    );
    Ok(SlideshowWidget { listeners, shared })
}
