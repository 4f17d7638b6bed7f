/// Source of cancellable repeating tasks.
///
/// The slideshow only arms and cancels; whoever implements this decides what
/// a tick does. In the browser that is a `gloo_timers` interval wired back to
/// the widget, in tests a virtual clock.
pub trait Scheduler {
    type Handle;

    /// Arms a task that fires every `period_ms`, first after one full period.
    fn every(&mut self, period_ms: u32) -> Self::Handle;

    /// Cancels a task. The handle is consumed so it cannot fire afterwards.
    fn cancel(&mut self, handle: Self::Handle);
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;

    /// Virtual-time scheduler for driving autoplay in unit tests.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        now: u64,
        next_id: u64,
        armed: Vec<Task>,
        pub cancelled: usize,
    }

    #[derive(Debug, Clone, Copy)]
    struct Task {
        id: u64,
        due: u64,
        period: u64,
    }

    #[derive(Debug, PartialEq, Eq)]
    pub struct TaskId(u64);

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.now
        }

        pub fn armed(&self) -> usize {
            self.armed.len()
        }

        pub fn set_now(&mut self, now: u64) {
            self.now = now;
        }

        /// Pops the earliest firing at or before `until`, moving the clock
        /// there and rescheduling the task one period later.
        pub fn pop_due(&mut self, until: u64) -> Option<u64> {
            let task = self
                .armed
                .iter_mut()
                .filter(|task| task.due <= until)
                .min_by_key(|task| task.due)?;
            let fired_at = task.due;
            task.due += task.period;
            self.now = fired_at;
            Some(fired_at)
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = TaskId;

        fn every(&mut self, period_ms: u32) -> TaskId {
            self.next_id += 1;
            let period = u64::from(period_ms);
            self.armed.push(Task {
                id: self.next_id,
                due: self.now + period,
                period,
            });
            TaskId(self.next_id)
        }

        fn cancel(&mut self, handle: TaskId) {
            self.armed.retain(|task| task.id != handle.0);
            self.cancelled += 1;
        }
    }
}
