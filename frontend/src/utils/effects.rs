//! Arithmetic behind the decorative page effects.

/// Number of frames a stat counter takes to reach its target.
pub const COUNTER_FRAMES: u32 = 100;
/// Delay between counter frames.
pub const COUNTER_FRAME_MS: u32 = 20;

const RANDOM_TARGET_MIN: u32 = 100;
const RANDOM_TARGET_SPAN: u32 = 500;

pub fn header_is_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Where to scroll so a section lands just below the fixed header.
pub fn anchor_scroll_top(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height - 20.0
}

/// Selector for an in-page link target. A bare `#` has none.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// True when `rect` lies entirely inside a `width` × `height` viewport.
pub fn fully_in_viewport(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}

/// Target for a stat counter. Returns the value and whether it has to be
/// written back to the element because the page did not provide one.
///
/// `random` is a sample from `[0, 1)`.
pub fn counter_target(attr: Option<&str>, random: f64) -> (u32, bool) {
    match attr.map(str::trim).filter(|attr| !attr.is_empty()) {
        Some(attr) => (leading_number(attr), false),
        None => {
            let spread = (random.clamp(0.0, 1.0) * f64::from(RANDOM_TARGET_SPAN)) as u32;
            (RANDOM_TARGET_MIN + spread.min(RANDOM_TARGET_SPAN - 1), true)
        }
    }
}

/// Leading decimal digits of `text`, so `"250+"` reads as 250. Anything
/// unparsable counts as 0.
fn leading_number(text: &str) -> u32 {
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Frame-by-frame count-up from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    frame: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    Done(String),
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self { target, frame: 0 }
    }

    pub fn step(&mut self) -> CounterFrame {
        if self.frame >= COUNTER_FRAMES || self.target == 0 {
            return CounterFrame::Done(format!("{}+", self.target));
        }
        self.frame += 1;
        let value = (u64::from(self.target) * u64::from(self.frame)).div_ceil(u64::from(COUNTER_FRAMES));
        CounterFrame::Running(format!("{}+", value))
    }
}

/// Inline styles for the three hamburger bars: `(property, value)` per bar.
pub fn hamburger_bar_styles(open: bool) -> [(&'static str, &'static str); 3] {
    if open {
        [
            ("transform", "rotate(45deg) translate(5px, 5px)"),
            ("opacity", "0"),
            ("transform", "rotate(-45deg) translate(7px, -6px)"),
        ]
    } else {
        [("transform", "none"), ("opacity", "1"), ("transform", "none")]
    }
}

/// Element to move focus to so Tab stays inside an open menu, if any.
pub fn focus_trap_target(focusable: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    let last = focusable.checked_sub(1)?;
    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

pub fn social_link_label(href: &str) -> &'static str {
    if href.contains("instagram") {
        "Follow us on Instagram"
    } else {
        "Follow us on WhatsApp"
    }
}

/// Staggered start for the floating animation of the `index`th service card.
pub fn float_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.2)
}
