use super::carousel::{self, CarouselWidget};
use super::chat::{self, ChatWidgetHandle};
use super::slideshow::{self, SlideshowWidget};
use super::{document, effects, form, images, menu, Bindings};
use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::MountError;

/// Everything mounted on the page. Features are independent: one that cannot
/// find its markup is skipped and the rest carry on.
pub struct Page {
    _carousel: Option<CarouselWidget>,
    _slideshow: Option<SlideshowWidget>,
    _chat: Option<ChatWidgetHandle>,
    _features: Vec<Bindings>,
}

fn attach<T>(name: &str, result: Result<T, MountError>) -> Option<T> {
    match result {
        Ok(mounted) => Some(mounted),
        Err(e) => {
            log::debug!("Skipping {}: {}", name, e);
            None
        }
    }
}

pub fn load_config() -> SiteConfig {
    let raw = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    SiteConfig::load(raw.as_deref())
}

impl Page {
    pub fn mount(config: &SiteConfig) -> Self {
        let features: Vec<Bindings> = [
            ("header", effects::header(config)),
            ("mobile menu", menu::mount()),
            ("smooth scrolling", effects::smooth_scrolling()),
            ("stats counters", effects::stats_counters()),
            ("reveal on scroll", effects::reveal_on_scroll()),
            ("service cards", effects::service_cards()),
            ("parallax", effects::parallax(config)),
            ("contact form", form::contact_form()),
            ("lazy images", images::lazy_loading()),
            ("image errors", images::hide_broken_images()),
            ("preloader", effects::preloader()),
            ("accessibility labels", effects::accessibility_labels()),
        ]
        .into_iter()
        .filter_map(|(name, result)| attach(name, result))
        .filter(|bindings| !bindings.is_empty())
        .collect();

        let page = Self {
            _carousel: attach("testimonial carousel", carousel::mount(config)),
            _slideshow: attach("transformation slideshow", slideshow::mount(config)),
            _chat: attach("chat widget", chat::mount(config)),
            _features: features,
        };
        log::info!("Page interactions ready");
        page
    }
}
