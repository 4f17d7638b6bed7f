/// Horizontal travel, in CSS pixels, below which a touch is treated as a tap.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Direction of a completed horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left; shows the next panel.
    Left,
    /// Finger moved left-to-right; shows the previous panel.
    Right,
}

impl Swipe {
    /// Index step this swipe applies to a panel sequence.
    pub fn delta(self) -> isize {
        match self {
            Swipe::Left => 1,
            Swipe::Right => -1,
        }
    }
}

/// Classifies a touch that started at `start_x` and ended at `end_x`.
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Option<Swipe> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    Some(if diff > 0.0 { Swipe::Left } else { Swipe::Right })
}

/// Pairs `touchstart` with `touchend` for one gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. A `touchend` without a matching start yields nothing.
    pub fn finish(&mut self, x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        classify(start, x, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn short_swipes_are_noise() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        assert_eq!(tracker.finish(151.0), None);
        tracker.begin(200.0);
        assert_eq!(tracker.finish(249.0), None);
    }

    #[test]
    fn threshold_itself_is_not_enough() {
        assert_eq!(classify(100.0, 50.0, DEFAULT_SWIPE_THRESHOLD), None);
    }

    #[test]
    fn leftward_swipe_goes_forward() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        let swipe = tracker.finish(149.0);
        assert_eq!(swipe, Some(Swipe::Left));
        assert_eq!(swipe.map(Swipe::delta), Some(1));
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        let swipe = tracker.finish(251.0);
        assert_eq!(swipe, Some(Swipe::Right));
        assert_eq!(swipe.map(Swipe::delta), Some(-1));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(0.0), None);
        tracker.begin(300.0);
        assert_eq!(tracker.finish(0.0), Some(Swipe::Left));
        assert_eq!(tracker.finish(0.0), None);
    }

    proptest! {
        #[test]
        fn direction_follows_sign(start in -2000.0f64..2000.0, travel in 50.001f64..2000.0) {
            prop_assert_eq!(classify(start, start - travel, DEFAULT_SWIPE_THRESHOLD), Some(Swipe::Left));
            prop_assert_eq!(classify(start, start + travel, DEFAULT_SWIPE_THRESHOLD), Some(Swipe::Right));
        }
    }
}
