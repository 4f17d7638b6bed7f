use super::cycle::PanelCycler;
use super::swipe::Swipe;
use super::timer::Scheduler;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 4000;

/// Before/after slideshow with autoplay.
///
/// The autoplay task is armed exactly when the slideshow is mounted and not
/// paused. Manual navigation replaces the running task with a fresh one so the
/// next automatic advance is always a full interval after the interaction.
pub struct Slideshow<S: Scheduler> {
    cycler: PanelCycler,
    scheduler: S,
    interval_ms: u32,
    autoplay: Option<S::Handle>,
    paused: bool,
    mounted: bool,
}

impl<S: Scheduler> Slideshow<S> {
    pub fn new(len: usize, interval_ms: u32, scheduler: S) -> Self {
        Self {
            cycler: PanelCycler::new(len),
            scheduler,
            interval_ms,
            autoplay: None,
            paused: false,
            mounted: false,
        }
    }

    /// Shows the first slide and starts autoplay. An empty slideshow never
    /// mounts and never arms a timer.
    pub fn mount(&mut self) -> Option<usize> {
        let first = self.cycler.go_to(0)?;
        self.mounted = true;
        self.restart_autoplay();
        Some(first)
    }

    /// Stops autoplay for good.
    pub fn unmount(&mut self) {
        self.cancel_autoplay();
        self.mounted = false;
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

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Autoplay step. Leaves the running task alone.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.is_playing() {
            return None;
        }
        self.cycler.next()
    }

    pub fn next(&mut self) -> Option<usize> {
        let index = self.cycler.next()?;
        self.restart_autoplay();
        Some(index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        let index = self.cycler.prev()?;
        self.restart_autoplay();
        Some(index)
    }

    /// Indicator click. Out-of-range targets change nothing, autoplay included.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        let index = self.cycler.go_to(index)?;
        self.restart_autoplay();
        Some(index)
    }

    pub fn swipe(&mut self, swipe: Swipe) -> Option<usize> {
        let index = self.cycler.step(swipe.delta())?;
        self.restart_autoplay();
        Some(index)
    }

    /// Pointer entered the slideshow.
    pub fn pause(&mut self) {
        self.paused = true;
        self.cancel_autoplay();
    }

    /// Pointer left the slideshow. Always starts a fresh interval.
    pub fn resume(&mut self) {
        self.paused = false;
        self.restart_autoplay();
    }

    fn restart_autoplay(&mut self) {
        self.cancel_autoplay();
        if self.mounted && !self.paused {
            self.autoplay = Some(self.scheduler.every(self.interval_ms));
        }
    }

    fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for Slideshow<S> {
    fn drop(&mut self) {
        self.cancel_autoplay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::timer::manual::ManualScheduler;
    use pretty_assertions::assert_eq;

    fn slideshow(len: usize) -> Slideshow<ManualScheduler> {
        let mut show = Slideshow::new(len, DEFAULT_AUTOPLAY_INTERVAL_MS, ManualScheduler::default());
        show.mount();
        show
    }

    /// Fires every task due up to `until` and returns the firing times.
    fn run_until(show: &mut Slideshow<ManualScheduler>, until: u64) -> Vec<u64> {
        let mut fired = Vec::new();
        while let Some(at) = show.scheduler_mut().pop_due(until) {
            show.tick();
            fired.push(at);
        }
        show.scheduler_mut().set_now(until);
        fired
    }

    #[test]
    fn mount_shows_first_slide_and_arms_one_timer() {
        let show = slideshow(3);
        assert_eq!(show.active(), Some(0));
        assert!(show.is_playing());
        assert_eq!(show.scheduler().armed(), 1);
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let mut show = slideshow(3);
        assert_eq!(run_until(&mut show, 12_000), vec![4000, 8000, 12_000]);
        assert_eq!(show.active(), Some(0));
    }

    #[test]
    fn manual_navigation_restarts_the_clock() {
        let mut show = slideshow(4);
        assert_eq!(run_until(&mut show, 3000), Vec::<u64>::new());

        assert_eq!(show.next(), Some(1));
        assert_eq!(show.scheduler().armed(), 1);

        // The old task would have fired at 4000.
        assert_eq!(run_until(&mut show, 6999), Vec::<u64>::new());
        assert_eq!(run_until(&mut show, 7000), vec![7000]);
        assert_eq!(show.active(), Some(2));
    }

    #[test]
    fn every_manual_source_restarts() {
        let mut show = slideshow(5);
        show.scheduler_mut().set_now(1000);
        show.prev();
        show.scheduler_mut().set_now(2000);
        show.go_to(3);
        show.scheduler_mut().set_now(2500);
        show.swipe(Swipe::Left);
        assert_eq!(show.active(), Some(4));
        assert_eq!(show.scheduler().armed(), 1);
        assert_eq!(run_until(&mut show, 6500), vec![6500]);
    }

    #[test]
    fn out_of_range_indicator_keeps_timer() {
        let mut show = slideshow(3);
        let cancelled = show.scheduler().cancelled;
        assert_eq!(show.go_to(7), None);
        assert_eq!(show.scheduler().cancelled, cancelled);
        assert_eq!(run_until(&mut show, 4000), vec![4000]);
    }

    #[test]
    fn hover_pauses_and_leave_resumes_fresh() {
        let mut show = slideshow(3);
        show.scheduler_mut().set_now(3500);
        show.pause();
        assert!(show.is_paused());
        assert_eq!(show.scheduler().armed(), 0);
        assert_eq!(run_until(&mut show, 10_000), Vec::<u64>::new());

        show.resume();
        assert_eq!(show.scheduler().armed(), 1);
        assert_eq!(run_until(&mut show, 14_000), vec![14_000]);
    }

    #[test]
    fn navigating_while_paused_does_not_arm() {
        let mut show = slideshow(3);
        show.pause();
        assert_eq!(show.next(), Some(1));
        assert!(!show.is_playing());
        assert_eq!(show.tick(), None);
    }

    #[test]
    fn resume_without_pause_never_doubles_timers() {
        let mut show = slideshow(3);
        show.resume();
        show.resume();
        assert_eq!(show.scheduler().armed(), 1);
    }

    #[test]
    fn empty_slideshow_never_arms() {
        let mut show = Slideshow::new(0, DEFAULT_AUTOPLAY_INTERVAL_MS, ManualScheduler::default());
        assert_eq!(show.mount(), None);
        assert_eq!(show.next(), None);
        assert_eq!(show.prev(), None);
        assert_eq!(show.go_to(0), None);
        assert_eq!(show.swipe(Swipe::Right), None);
        show.resume();
        assert_eq!(show.tick(), None);
        assert!(!show.is_playing());
        assert_eq!(show.scheduler().armed(), 0);
    }

    #[test]
    fn unmount_cancels_autoplay() {
        let mut show = slideshow(3);
        show.unmount();
        assert_eq!(show.scheduler().armed(), 0);
        show.next();
        assert_eq!(show.scheduler().armed(), 0);
    }

    #[test]
    fn exactly_one_slide_and_indicator_active() {
        let mut show = slideshow(4);
        show.prev();
        let marks: Vec<bool> = show.marks().collect();
        assert_eq!(marks, vec![false, false, false, true]);
    }
}
