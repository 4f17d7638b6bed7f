//! Cyclic index arithmetic shared by the testimonial carousel and the
//! transformation slideshow.

/// Moves `index` by `delta` positions inside `0..len`, wrapping at both ends.
///
/// Returns `None` for an empty sequence, since there is no valid position.
pub fn advance(index: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let base = (index as isize).rem_euclid(len);
    Some((base + delta).rem_euclid(len) as usize)
}

/// A fixed-size sequence of panels with exactly one active position.
///
/// Every mutator returns the new active index when something moved, and
/// `None` when the call was a no-op (empty sequence or out-of-range target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelCycler {
    len: usize,
    active: usize,
}

impl PanelCycler {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.active)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.step(-1)
    }

    pub fn step(&mut self, delta: isize) -> Option<usize> {
        let index = advance(self.active, delta, self.len)?;
        self.active = index;
        Some(index)
    }

    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.active = index;
        Some(index)
    }

    /// Active flag for each panel in order. Exactly one entry is `true` for a
    /// non-empty sequence.
    pub fn marks(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| i == self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut cycler = PanelCycler::new(3);
        cycler.go_to(2);
        assert_eq!(cycler.next(), Some(0));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut cycler = PanelCycler::new(4);
        assert_eq!(cycler.prev(), Some(3));
        assert_eq!(cycler.active(), Some(3));
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut cycler = PanelCycler::new(3);
        cycler.go_to(1);
        assert_eq!(cycler.go_to(3), None);
        assert_eq!(cycler.active(), Some(1));
    }

    #[test]
    fn empty_sequence_never_moves() {
        let mut cycler = PanelCycler::new(0);
        assert_eq!(cycler.next(), None);
        assert_eq!(cycler.prev(), None);
        assert_eq!(cycler.go_to(0), None);
        assert_eq!(cycler.active(), None);
        assert_eq!(cycler.marks().count(), 0);
    }

    #[test]
    fn single_panel_stays_put() {
        let mut cycler = PanelCycler::new(1);
        assert_eq!(cycler.next(), Some(0));
        assert_eq!(cycler.prev(), Some(0));
    }

    #[test]
    fn advance_handles_large_deltas() {
        assert_eq!(advance(1, 7, 3), Some(2));
        assert_eq!(advance(0, -7, 3), Some(2));
        assert_eq!(advance(5, 0, 0), None);
    }

    proptest! {
        #[test]
        fn exactly_one_panel_is_marked(len in 1usize..32, moves in prop::collection::vec(-3isize..=3, 0..64)) {
            let mut cycler = PanelCycler::new(len);
            for delta in moves {
                cycler.step(delta);
                let marks: Vec<bool> = cycler.marks().collect();
                prop_assert_eq!(marks.iter().filter(|m| **m).count(), 1);
                prop_assert_eq!(marks.iter().position(|m| *m), cycler.active());
            }
        }

        #[test]
        fn next_then_prev_returns_home(len in 1usize..32, start in 0usize..32) {
            let mut cycler = PanelCycler::new(len);
            cycler.go_to(start % len);
            cycler.next();
            cycler.prev();
            prop_assert_eq!(cycler.active(), Some(start % len));
        }

        #[test]
        fn advance_stays_in_bounds(index in 0usize..1000, delta in -1000isize..1000, len in 1usize..64) {
            let next = advance(index, delta, len).unwrap();
            prop_assert!(next < len);
        }
    }
}
