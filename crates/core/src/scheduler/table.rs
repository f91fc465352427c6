//! Task table and lifecycle controller
//!
//! The table is a fixed array of [`TaskRecord`]s sized at build time. Slots
//! are assigned by the application, not allocated: registering into an
//! occupied slot replaces its task.

use core::fmt;

use super::error::ConfigError;
use super::profile::TaskProfile;
use super::types::{Repetitions, TaskId, TaskState};
use crate::traits::Task;

/// One slot of the task table
pub struct TaskRecord<'a> {
    pub(super) task: Option<&'a mut dyn Task>,
    pub(super) state: TaskState,
    pub(super) period_us: u32,
    pub(super) countdown_us: u32,
    pub(super) recurrence_target: Repetitions,
    pub(super) recurrence_count: u32,
    pub(super) profile: TaskProfile,
}

impl<'a> TaskRecord<'a> {
    /// An unoccupied slot
    pub const fn empty() -> Self {
        Self {
            task: None,
            state: TaskState::Finished,
            period_us: 0,
            countdown_us: 0,
            recurrence_target: Repetitions::Unlimited,
            recurrence_count: 0,
            profile: TaskProfile::EMPTY,
        }
    }

    /// Whether a task is attached to this slot
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.task.is_some()
    }

    #[inline]
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Interval between firings (us)
    #[inline]
    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Time left before the task is due (us)
    #[inline]
    pub fn countdown_us(&self) -> u32 {
        self.countdown_us
    }

    #[inline]
    pub fn recurrence_target(&self) -> Repetitions {
        self.recurrence_target
    }

    /// Number of firings since registration
    ///
    /// Never returns to zero once the task has fired.
    #[inline]
    pub fn recurrence_count(&self) -> u32 {
        self.recurrence_count
    }

    #[inline]
    pub fn profile(&self) -> TaskProfile {
        self.profile
    }

    /// Whether the task has used up its repetitions
    ///
    /// An exhausted task stays in its current state and never fires again
    /// until it is ended or registered anew.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.is_occupied() && !self.recurrence_target.allows(self.recurrence_count)
    }
}

impl Default for TaskRecord<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for TaskRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRecord")
            .field("occupied", &self.is_occupied())
            .field("state", &self.state)
            .field("period_us", &self.period_us)
            .field("countdown_us", &self.countdown_us)
            .field("recurrence_target", &self.recurrence_target)
            .field("recurrence_count", &self.recurrence_count)
            .field("profile", &self.profile)
            .finish()
    }
}

/// Fixed-capacity table of `N` task slots
///
/// The table is the scheduler's only state. It borrows its tasks for `'a`,
/// so no heap is needed.
pub struct TaskTable<'a, const N: usize> {
    pub(super) tick_period_us: u32,
    pub(super) slots: [TaskRecord<'a>; N],
}

impl<'a, const N: usize> TaskTable<'a, N> {
    /// Creates a table ticking every `tick_period_us`, with every slot empty
    pub fn new(tick_period_us: u32) -> Self {
        Self {
            tick_period_us,
            slots: core::array::from_fn(|_| TaskRecord::empty()),
        }
    }

    /// Sets a new tick period and empties every slot
    pub fn initialize(&mut self, tick_period_us: u32) {
        self.tick_period_us = tick_period_us;
        for slot in self.slots.iter_mut() {
            *slot = TaskRecord::empty();
        }
    }

    /// Scheduler tick period (us)
    #[inline]
    pub fn tick_period_us(&self) -> u32 {
        self.tick_period_us
    }

    /// Number of slots
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Register `task` in slot `id`
    ///
    /// The task becomes Running with its countdown set to
    /// `initial_delay_us`, its run counter cleared and a fresh profile.
    /// Both `initial_delay_us` and `period_us` must be at least one tick.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the task is missing or either duration
    /// is below the tick period. The slot is left untouched on error.
    pub fn add_task(
        &mut self,
        id: TaskId<N>,
        task: Option<&'a mut dyn Task>,
        initial_delay_us: u32,
        period_us: u32,
        repetitions: Repetitions,
    ) -> Result<(), ConfigError> {
        let task = task.ok_or(ConfigError::MissingTask)?;

        if period_us < self.tick_period_us {
            return Err(ConfigError::PeriodBelowTick {
                period_us,
                tick_us: self.tick_period_us,
            });
        }

        if initial_delay_us < self.tick_period_us {
            return Err(ConfigError::DelayBelowTick {
                delay_us: initial_delay_us,
                tick_us: self.tick_period_us,
            });
        }

        self.slots[id.index()] = TaskRecord {
            task: Some(task),
            state: TaskState::Running,
            period_us,
            countdown_us: initial_delay_us,
            recurrence_target: repetitions,
            recurrence_count: 0,
            profile: TaskProfile::new(),
        };

        Ok(())
    }

    /// Empty slot `id`, detaching its task and clearing all timing and
    /// profiling data
    pub fn end_task(&mut self, id: TaskId<N>) {
        self.slots[id.index()] = TaskRecord::empty();
    }

    /// Resume a paused task. Returns whether the state changed.
    pub fn start_task(&mut self, id: TaskId<N>) -> bool {
        self.transition(id, TaskState::Paused, TaskState::Running)
    }

    /// Pause a running task. Returns whether the state changed.
    pub fn pause_task(&mut self, id: TaskId<N>) -> bool {
        self.transition(id, TaskState::Running, TaskState::Paused)
    }

    /// Make the task due on the next dispatch pass
    ///
    /// The countdown is zeroed whatever the slot's state; a paused task
    /// fires on the first pass after it is started again.
    pub fn expedite_task(&mut self, id: TaskId<N>) {
        self.slots[id.index()].countdown_us = 0;
    }

    fn transition(&mut self, id: TaskId<N>, from: TaskState, to: TaskState) -> bool {
        let slot = &mut self.slots[id.index()];
        if slot.state == from {
            slot.state = to;
            true
        } else {
            false
        }
    }

    /// Read-only view of slot `id`
    #[inline]
    pub fn record(&self, id: TaskId<N>) -> &TaskRecord<'a> {
        &self.slots[id.index()]
    }

    #[inline]
    pub fn state(&self, id: TaskId<N>) -> TaskState {
        self.slots[id.index()].state
    }

    /// Execution profile of slot `id`
    #[inline]
    pub fn profile(&self, id: TaskId<N>) -> TaskProfile {
        self.slots[id.index()].profile
    }

    /// Occupied slots in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (TaskId<N>, &TaskRecord<'a>)> {
        TaskId::all()
            .zip(self.slots.iter())
            .filter(|(_, record)| record.is_occupied())
    }

    /// Number of occupied slots
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|record| record.is_occupied()).count()
    }
}

impl<const N: usize> fmt::Debug for TaskTable<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskTable")
            .field("tick_period_us", &self.tick_period_us)
            .field("slots", &self.slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::MILLISECONDS;

    const TICK: u32 = 100;

    fn noop(_elapsed_us: u32) {}

    #[test]
    fn test_new_table_is_empty() {
        let table: TaskTable<'_, 4> = TaskTable::new(TICK);

        assert_eq!(table.tick_period_us(), TICK);
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.active_count(), 0);
        for id in TaskId::<4>::all() {
            assert_eq!(table.state(id), TaskState::Finished);
            assert!(!table.record(id).is_occupied());
        }
    }

    #[test]
    fn test_add_task_initializes_slot() {
        let mut task = noop;
        let mut table: TaskTable<'_, 4> = TaskTable::new(TICK);
        let id = TaskId::slot(2);

        table
            .add_task(id, Some(&mut task), 200, 500, Repetitions::times(3))
            .unwrap();

        let record = table.record(id);
        assert!(record.is_occupied());
        assert_eq!(record.state(), TaskState::Running);
        assert_eq!(record.countdown_us(), 200);
        assert_eq!(record.period_us(), 500);
        assert_eq!(record.recurrence_target(), Repetitions::times(3));
        assert_eq!(record.recurrence_count(), 0);
        assert_eq!(record.profile(), TaskProfile::new());
        assert_eq!(record.profile().min_ticks, u32::MAX);
        assert_eq!(table.active_count(), 1);
    }

    #[test]
    fn test_add_task_accepts_exactly_one_tick() {
        let mut task = noop;
        let mut table: TaskTable<'_, 1> = TaskTable::new(TICK);

        assert!(table
            .add_task(TaskId::slot(0), Some(&mut task), TICK, TICK, Repetitions::Unlimited)
            .is_ok());
    }

    #[test]
    fn test_add_task_rejects_missing_task() {
        let mut table: TaskTable<'_, 2> = TaskTable::new(TICK);

        let result = table.add_task(TaskId::slot(0), None, 200, 500, Repetitions::Unlimited);

        assert_eq!(result, Err(ConfigError::MissingTask));
        assert!(!table.record(TaskId::slot(0)).is_occupied());
    }

    #[test]
    fn test_add_task_rejects_short_period_without_touching_slot() {
        let mut first = noop;
        let mut second = noop;
        let mut table: TaskTable<'_, 2> = TaskTable::new(TICK);
        let id = TaskId::slot(1);

        table
            .add_task(id, Some(&mut first), 300, 700, Repetitions::times(2))
            .unwrap();

        let result = table.add_task(id, Some(&mut second), 200, 50, Repetitions::Unlimited);

        assert_eq!(
            result,
            Err(ConfigError::PeriodBelowTick {
                period_us: 50,
                tick_us: TICK
            })
        );
        let record = table.record(id);
        assert_eq!(record.countdown_us(), 300);
        assert_eq!(record.period_us(), 700);
        assert_eq!(record.recurrence_target(), Repetitions::times(2));
    }

    #[test]
    fn test_add_task_rejects_short_delay() {
        let mut task = noop;
        let mut table: TaskTable<'_, 2> = TaskTable::new(MILLISECONDS);

        let result = table.add_task(
            TaskId::slot(0),
            Some(&mut task),
            999,
            5 * MILLISECONDS,
            Repetitions::Unlimited,
        );

        assert_eq!(
            result,
            Err(ConfigError::DelayBelowTick {
                delay_us: 999,
                tick_us: MILLISECONDS
            })
        );
        assert_eq!(table.state(TaskId::slot(0)), TaskState::Finished);
    }

    #[test]
    fn test_period_checked_before_delay() {
        let mut task = noop;
        let mut table: TaskTable<'_, 1> = TaskTable::new(TICK);

        let result =
            table.add_task(TaskId::slot(0), Some(&mut task), 10, 10, Repetitions::Unlimited);

        assert!(matches!(result, Err(ConfigError::PeriodBelowTick { .. })));
    }

    #[test]
    fn test_pause_and_start() {
        let mut task = noop;
        let mut table: TaskTable<'_, 2> = TaskTable::new(TICK);
        let id = TaskId::slot(0);
        table
            .add_task(id, Some(&mut task), 200, 500, Repetitions::Unlimited)
            .unwrap();

        // Start on a running task is a no-op
        assert!(!table.start_task(id));
        assert_eq!(table.state(id), TaskState::Running);

        assert!(table.pause_task(id));
        assert_eq!(table.state(id), TaskState::Paused);

        // Pause on a paused task is a no-op
        assert!(!table.pause_task(id));
        assert_eq!(table.state(id), TaskState::Paused);

        assert!(table.start_task(id));
        assert_eq!(table.state(id), TaskState::Running);
    }

    #[test]
    fn test_start_and_pause_ignore_empty_slot() {
        let mut table: TaskTable<'_, 2> = TaskTable::new(TICK);
        let id = TaskId::slot(1);

        assert!(!table.start_task(id));
        assert!(!table.pause_task(id));
        assert_eq!(table.state(id), TaskState::Finished);
    }

    #[test]
    fn test_end_task_clears_slot() {
        let mut task = noop;
        let mut table: TaskTable<'_, 2> = TaskTable::new(TICK);
        let id = TaskId::slot(0);
        table
            .add_task(id, Some(&mut task), 200, 500, Repetitions::times(4))
            .unwrap();
        table.pause_task(id);

        table.end_task(id);

        let record = table.record(id);
        assert!(!record.is_occupied());
        assert_eq!(record.state(), TaskState::Finished);
        assert_eq!(record.period_us(), 0);
        assert_eq!(record.countdown_us(), 0);
        assert_eq!(record.recurrence_count(), 0);
        assert_eq!(record.profile(), TaskProfile::EMPTY);

        // Ended tasks cannot be restarted
        assert!(!table.start_task(id));
    }

    #[test]
    fn test_expedite_zeroes_countdown_in_any_state() {
        let mut task = noop;
        let mut table: TaskTable<'_, 2> = TaskTable::new(TICK);
        let id = TaskId::slot(0);
        table
            .add_task(id, Some(&mut task), 900, 500, Repetitions::Unlimited)
            .unwrap();
        table.pause_task(id);

        table.expedite_task(id);

        assert_eq!(table.record(id).countdown_us(), 0);
        assert_eq!(table.state(id), TaskState::Paused);
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut a = noop;
        let mut b = noop;
        let mut table: TaskTable<'_, 3> = TaskTable::new(TICK);
        table
            .add_task(TaskId::slot(0), Some(&mut a), 200, 500, Repetitions::Unlimited)
            .unwrap();
        table
            .add_task(TaskId::slot(2), Some(&mut b), 200, 500, Repetitions::Unlimited)
            .unwrap();

        table.initialize(MILLISECONDS);

        assert_eq!(table.tick_period_us(), MILLISECONDS);
        assert_eq!(table.active_count(), 0);
    }

    #[test]
    fn test_iter_yields_occupied_slots_in_order() {
        let mut a = noop;
        let mut b = noop;
        let mut table: TaskTable<'_, 4> = TaskTable::new(TICK);
        table
            .add_task(TaskId::slot(3), Some(&mut a), 200, 500, Repetitions::Unlimited)
            .unwrap();
        table
            .add_task(TaskId::slot(1), Some(&mut b), 200, 600, Repetitions::Unlimited)
            .unwrap();

        let mut iter = table.iter();
        let (first, record) = iter.next().unwrap();
        assert_eq!(first.index(), 1);
        assert_eq!(record.period_us(), 600);
        assert_eq!(iter.next().unwrap().0.index(), 3);
        assert!(iter.next().is_none());
    }
}
