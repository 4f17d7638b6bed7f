use super::cycle::PanelCycler;
use super::swipe::Swipe;

/// Testimonial slider: one visible card out of a fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    cycler: PanelCycler,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            cycler: PanelCycler::new(len),
        }
    }

    pub fn len(&self) -> usize {
        self.cycler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycler.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.cycler.active()
    }

    pub fn marks(&self) -> impl Iterator<Item = bool> + '_ {
        self.cycler.marks()
    }

    pub fn next(&mut self) -> Option<usize> {
        self.cycler.next()
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.cycler.prev()
    }

    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        self.cycler.go_to(index)
    }

    pub fn swipe(&mut self, swipe: Swipe) -> Option<usize> {
        self.cycler.step(swipe.delta())
    }

    /// Arrow keys navigate only while focus sits inside the testimonials
    /// section; anything else is left to the page.
    pub fn key(&mut self, key: &str, focus_within: bool) -> Option<usize> {
        if !focus_within {
            return None;
        }
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::swipe::{SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
    use pretty_assertions::assert_eq;

    fn marks(carousel: &Carousel) -> Vec<bool> {
        carousel.marks().collect()
    }

    #[test]
    fn starts_on_first_card() {
        let carousel = Carousel::new(3);
        assert_eq!(marks(&carousel), vec![true, false, false]);
    }

    #[test]
    fn buttons_wrap_in_both_directions() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), Some(2));
        assert_eq!(marks(&carousel), vec![false, false, true]);
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(marks(&carousel), vec![true, false, false]);
    }

    #[test]
    fn arrow_keys_need_focus_inside() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.key("ArrowRight", false), None);
        assert_eq!(carousel.active(), Some(0));
        assert_eq!(carousel.key("ArrowRight", true), Some(1));
        assert_eq!(carousel.key("ArrowLeft", true), Some(0));
        assert_eq!(carousel.key("Enter", true), None);
    }

    #[test]
    fn swipes_respect_threshold() {
        let mut carousel = Carousel::new(5);
        let mut tracker = SwipeTracker::new(DEFAULT_SWIPE_THRESHOLD);

        tracker.begin(300.0);
        assert_eq!(tracker.finish(251.0).and_then(|s| carousel.swipe(s)), None);
        assert_eq!(carousel.active(), Some(0));

        tracker.begin(300.0);
        assert_eq!(tracker.finish(249.0).and_then(|s| carousel.swipe(s)), Some(1));

        tracker.begin(300.0);
        assert_eq!(tracker.finish(351.0).and_then(|s| carousel.swipe(s)), Some(0));
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.go_to(0), None);
        assert_eq!(carousel.key("ArrowRight", true), None);
        assert_eq!(carousel.swipe(Swipe::Left), None);
        assert!(marks(&carousel).is_empty());
    }
}
