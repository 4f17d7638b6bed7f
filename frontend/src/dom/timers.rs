use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::widgets::timer::Scheduler;

/// Browser intervals that all call back into the same widget.
pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&mut self, period_ms: u32) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(period_ms, move || on_tick())
    }

    fn cancel(&mut self, handle: Interval) {
        // Dropping the interval clears it.
        drop(handle);
    }
}
