use serde::Deserialize;

use crate::widgets::slideshow::DEFAULT_AUTOPLAY_INTERVAL_MS;
use crate::widgets::swipe::DEFAULT_SWIPE_THRESHOLD;

/// Element id of the optional inline JSON block that overrides these defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_WHATSAPP_RECIPIENT: &str = "919797387668";

pub fn get_whatsapp_recipient() -> &'static str {
    option_env!("WHATSAPP_RECIPIENT").unwrap_or(DEFAULT_WHATSAPP_RECIPIENT)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub chat: ChatConfig,
    pub slideshow: SlideshowConfig,
    pub swipe_threshold: f64,
    /// Scroll offset past which the header switches to its compact style.
    pub header_scroll_offset: f64,
    pub parallax_speed: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            slideshow: SlideshowConfig::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            header_scroll_offset: 100.0,
            parallax_speed: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Host of the click-to-chat service.
    pub service: String,
    pub recipient: String,
    pub focus_delay_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            service: "wa.me".to_string(),
            recipient: get_whatsapp_recipient().to_string(),
            focus_delay_ms: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    pub interval_ms: u32,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Builds the page configuration from the inline override, if the page
    /// has one. A malformed override falls back to the defaults.
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
