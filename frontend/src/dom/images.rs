use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use super::listener::{Listener, Observer};
use super::{query_all, set_class, set_style, Bindings};
use crate::error::MountError;

const LAZY_IMAGES: &str = "img[data-src]";

fn load_deferred(img: &Element) {
    if let Some(src) = img.get_attribute("data-src") {
        let _ = img.set_attribute("src", &src);
    }
    set_class(img, "lazy", false);
}

/// Images with a `data-src` load when they scroll into view. Browsers without
/// `IntersectionObserver` get them all straight away.
pub fn lazy_loading() -> Result<Bindings, MountError> {
    let images = query_all(LAZY_IMAGES);
    if images.is_empty() {
        return Err(MountError::MissingElement(LAZY_IMAGES));
    }
    match Observer::once_visible(0.0, None, load_deferred) {
        Ok(observer) => {
            for img in &images {
                observer.observe(img);
            }
            Ok(Bindings {
                observers: vec![observer],
                ..Bindings::default()
            })
        }
        Err(e) => {
            log::debug!("Loading {} images eagerly: {}", images.len(), e);
            images.iter().for_each(load_deferred);
            Ok(Bindings::default())
        }
    }
}

/// Broken images are hidden instead of showing the browser placeholder.
pub fn hide_broken_images() -> Result<Bindings, MountError> {
    let mut bindings = Bindings::default();
    for img in query_all("img") {
        let target = img.clone();
        bindings.listeners.push(Listener::new(&img, "error", move |_| {
            set_style(&target, "display", "none");
            let src = target
                .dyn_ref::<HtmlImageElement>()
                .map(HtmlImageElement::src)
                .unwrap_or_default();
            log::warn!("Failed to load image: {}", src);
        }));
    }
    Ok(bindings)
}
