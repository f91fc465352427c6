//! Profile telemetry for scheduled tasks
//!
//! Collects the per-task execution profile and reports it through the log
//! macros. Transport of the log stream (defmt/RTT, test console) is up to
//! the logging backend.

use taskmaster_core::scheduler::{TaskState, TaskTable};

/// Log one line per registered task and warn about stuck tasks
///
/// A task that has used up its repetitions but was never ended keeps its
/// slot in Running and is re-evaluated on every pass without firing. Such
/// tasks are reported with a warning.
///
/// # Returns
///
/// Number of exhausted tasks still scheduled
#[allow(unused_variables)]
pub fn report_task_profiles<const N: usize>(tasks: &TaskTable<'_, N>) -> usize {
    let active = tasks.active_count();
    if active == 0 {
        crate::log_info!("No scheduled tasks ({} slots)", N);
        return 0;
    }

    crate::log_info!("Task profiles ({} of {} slots):", active, N);

    let mut exhausted = 0;
    for (id, record) in tasks.iter() {
        let profile = record.profile();

        if profile.has_samples() {
            crate::log_info!(
                "  slot {}: {} period={}us runs={} exec min={} avg={} max={} ticks",
                id.index(),
                record.state().as_str(),
                record.period_us(),
                record.recurrence_count(),
                profile.min_ticks,
                profile.avg_ticks,
                profile.max_ticks
            );
        } else {
            crate::log_info!(
                "  slot {}: {} period={}us not run yet",
                id.index(),
                record.state().as_str(),
                record.period_us()
            );
        }

        if record.is_exhausted() && record.state() == TaskState::Running {
            crate::log_warn!(
                "Task {} finished its {} repetitions but is still scheduled",
                id.index(),
                record.recurrence_target().count()
            );
            exhausted += 1;
        }
    }

    exhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockClock;
    use taskmaster_core::scheduler::{Repetitions, TaskId};

    const TICK: u32 = 100;

    #[test]
    fn test_report_empty_table() {
        let tasks: TaskTable<'_, 4> = TaskTable::new(TICK);
        assert_eq!(report_task_profiles(&tasks), 0);
    }

    #[test]
    fn test_report_flags_exhausted_running_task() {
        let clock = MockClock::new();
        let mut once = |_: u32| clock.advance(3);
        let mut forever = |_: u32| clock.advance(1);
        let mut tasks: TaskTable<'_, 4> = TaskTable::new(TICK);
        tasks
            .add_task(TaskId::slot(0), Some(&mut once), TICK, TICK, Repetitions::times(1))
            .unwrap();
        tasks
            .add_task(TaskId::slot(2), Some(&mut forever), TICK, TICK, Repetitions::Unlimited)
            .unwrap();

        tasks.dispatch(&clock);
        tasks.dispatch(&clock);

        assert_eq!(report_task_profiles(&tasks), 1);
    }

    #[test]
    fn test_report_ignores_paused_exhausted_task() {
        let clock = MockClock::new();
        let mut once = |_: u32| {};
        let mut tasks: TaskTable<'_, 2> = TaskTable::new(TICK);
        let id = TaskId::slot(1);
        tasks
            .add_task(id, Some(&mut once), TICK, TICK, Repetitions::times(1))
            .unwrap();
        tasks.dispatch(&clock);
        tasks.pause_task(id);

        assert_eq!(report_task_profiles(&tasks), 0);
    }

    #[test]
    fn test_report_task_not_run_yet() {
        let mut idle = |_: u32| {};
        let mut tasks: TaskTable<'_, 2> = TaskTable::new(TICK);
        tasks
            .add_task(TaskId::slot(0), Some(&mut idle), 10 * TICK, TICK, Repetitions::Unlimited)
            .unwrap();

        assert_eq!(report_task_profiles(&tasks), 0);
    }
}
