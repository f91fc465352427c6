//! Core types for the task table
//!
//! This module defines the fundamental types used by the scheduler:
//! - Time unit multipliers (all durations are `u32` microseconds)
//! - Bounded slot identifiers
//! - Task lifecycle state
//! - Recurrence limits

use core::num::NonZeroU32;

/// One microsecond
pub const MICROSECONDS: u32 = 1;

/// One millisecond in microseconds
pub const MILLISECONDS: u32 = 1_000;

/// One second in microseconds
pub const SECONDS: u32 = 1_000_000;

/// Identifier of a slot in a table with `N` slots
///
/// The slot index is the task's identity. A `TaskId<N>` can only hold an
/// index below `N`, so every control call addresses a real slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId<const N: usize>(usize);

impl<const N: usize> TaskId<N> {
    /// Returns the identifier for `index`, or `None` when the table has no
    /// such slot.
    #[inline]
    pub const fn new(index: usize) -> Option<Self> {
        if index < N {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the identifier for `index`
    ///
    /// Intended for `const` slot assignments, where an out-of-range index
    /// fails the build.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    ///
    /// ```rust
    /// use taskmaster_core::scheduler::TaskId;
    ///
    /// const HEARTBEAT: TaskId<4> = TaskId::slot(0);
    /// const TELEMETRY: TaskId<4> = TaskId::slot(1);
    /// assert_eq!(TELEMETRY.index(), 1);
    /// ```
    #[inline]
    pub const fn slot(index: usize) -> Self {
        assert!(index < N, "task slot out of range");
        Self(index)
    }

    /// Slot index
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// All slot identifiers in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).map(Self)
    }
}

/// Lifecycle state of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    /// Counting down and eligible to fire
    Running,
    /// Registered but frozen; the countdown does not advance
    Paused,
    /// Ended or never registered. Also the empty-slot state.
    #[default]
    Finished,
}

impl TaskState {
    /// Short name for log output
    pub const fn as_str(self) -> &'static str {
        match self {
            TaskState::Running => "running",
            TaskState::Paused => "paused",
            TaskState::Finished => "finished",
        }
    }
}

/// How many times a task may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repetitions {
    /// Fire forever
    #[default]
    Unlimited,
    /// Fire at most this many times
    Limited(NonZeroU32),
}

impl Repetitions {
    /// Converts a raw repetition count, where `0` means unlimited
    #[inline]
    pub const fn times(count: u32) -> Self {
        match NonZeroU32::new(count) {
            Some(limit) => Repetitions::Limited(limit),
            None => Repetitions::Unlimited,
        }
    }

    /// Raw repetition count, `0` for unlimited
    #[inline]
    pub const fn count(self) -> u32 {
        match self {
            Repetitions::Unlimited => 0,
            Repetitions::Limited(limit) => limit.get(),
        }
    }

    /// Whether a task that has already fired `run_count` times may fire again
    #[inline]
    pub const fn allows(self, run_count: u32) -> bool {
        match self {
            Repetitions::Unlimited => true,
            Repetitions::Limited(limit) => run_count < limit.get(),
        }
    }
}

impl From<u32> for Repetitions {
    fn from(count: u32) -> Self {
        Repetitions::times(count)
    }
}

/// Run counter after one more firing
///
/// The counter never wraps back to zero, since zero means "never run". A
/// wrap lands on one instead.
#[inline]
pub const fn next_run_count(run_count: u32) -> u32 {
    match run_count.wrapping_add(1) {
        0 => 1,
        next => next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_bounds() {
        assert_eq!(TaskId::<4>::new(3).map(TaskId::index), Some(3));
        assert!(TaskId::<4>::new(4).is_none());
        assert!(TaskId::<0>::new(0).is_none());
    }

    #[test]
    #[should_panic(expected = "task slot out of range")]
    fn test_task_id_slot_out_of_range() {
        let _ = TaskId::<2>::slot(2);
    }

    #[test]
    fn test_task_id_all_ascending() {
        let mut ids = TaskId::<3>::all();
        assert_eq!(ids.next(), Some(TaskId::slot(0)));
        assert_eq!(ids.next(), Some(TaskId::slot(1)));
        assert_eq!(ids.next(), Some(TaskId::slot(2)));
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_repetitions_zero_is_unlimited() {
        assert_eq!(Repetitions::times(0), Repetitions::Unlimited);
        assert_eq!(Repetitions::from(0), Repetitions::Unlimited);
        assert_eq!(Repetitions::times(3).count(), 3);
        assert_eq!(Repetitions::Unlimited.count(), 0);
    }

    #[test]
    fn test_repetitions_allows() {
        let three = Repetitions::times(3);
        assert!(three.allows(0));
        assert!(three.allows(2));
        assert!(!three.allows(3));
        assert!(!three.allows(4));

        assert!(Repetitions::Unlimited.allows(u32::MAX));
    }

    #[test]
    fn test_next_run_count_skips_zero() {
        assert_eq!(next_run_count(0), 1);
        assert_eq!(next_run_count(41), 42);
        assert_eq!(next_run_count(u32::MAX), 1);
    }

    #[test]
    fn test_task_state_default_is_finished() {
        assert_eq!(TaskState::default(), TaskState::Finished);
        assert_eq!(TaskState::Paused.as_str(), "paused");
    }
}
