//! Per-tick dispatch pass
//!
//! One call to [`TaskTable::dispatch`] accounts for exactly one scheduler
//! tick. Countdowns move in whole tick periods, never in measured wall time,
//! so a slow callback delays the rest of the pass but does not skew any
//! task's schedule.

use super::table::TaskTable;
use super::types::{next_run_count, TaskState};
use crate::traits::ProfilingClock;

/// What one dispatch pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    /// Tasks whose callback ran
    pub fired: u16,
    /// Due tasks held back because their repetitions are used up
    pub exhausted: u16,
    /// Running tasks that were counted down
    pub waiting: u16,
}

impl DispatchSummary {
    /// Whether any running task was looked at in this pass
    pub fn is_idle(&self) -> bool {
        self.fired == 0 && self.exhausted == 0 && self.waiting == 0
    }
}

impl<const N: usize> TaskTable<'_, N> {
    /// Run one tick's worth of scheduling
    ///
    /// Slots are visited in ascending order. For every running task:
    /// - if its countdown is at most one tick, it is due: when it still has
    ///   repetitions left its run counter is bumped, its countdown reloaded
    ///   with the period and the callback invoked with the period, timed on
    ///   `clock`
    /// - otherwise its countdown drops by one tick
    ///
    /// A due task without repetitions left is not advanced at all and is
    /// seen as due again on every following pass.
    pub fn dispatch<C: ProfilingClock>(&mut self, clock: &C) -> DispatchSummary {
        let tick_us = self.tick_period_us;
        let mut summary = DispatchSummary::default();

        for slot in self.slots.iter_mut() {
            let Some(task) = slot.task.as_deref_mut() else {
                continue;
            };

            if slot.state != TaskState::Running {
                continue;
            }

            if slot.countdown_us > tick_us {
                slot.countdown_us -= tick_us;
                summary.waiting = summary.waiting.saturating_add(1);
                continue;
            }

            if !slot.recurrence_target.allows(slot.recurrence_count) {
                summary.exhausted = summary.exhausted.saturating_add(1);
                continue;
            }

            slot.recurrence_count = next_run_count(slot.recurrence_count);
            slot.countdown_us = slot.period_us;

            let start = clock.now_ticks();
            task.run(slot.period_us);
            let end = clock.now_ticks();

            slot.profile
                .record(clock.elapsed_between(start, end), slot.recurrence_count);
            summary.fired = summary.fired.saturating_add(1);
        }

        summary
    }
}
