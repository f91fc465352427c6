//! Scheduler driver loop
//!
//! The driver owns the task table, the profiling clock and the watchdog, and
//! borrows the tick gate it shares with the timer interrupt. All table
//! mutation happens here, on the dispatch context; the interrupt only raises
//! the gate.

use taskmaster_core::scheduler::{
    ConfigError, DispatchSummary, Repetitions, TaskId, TaskTable,
};
use taskmaster_core::traits::{ProfilingClock, Task};

use super::gate::TickGate;
use super::monitor::report_task_profiles;
use crate::platform::traits::Watchdog;

/// Cooperative scheduler for up to `N` periodic tasks
///
/// - `'a`: lifetime of the borrowed task callbacks
/// - `'g`: lifetime of the tick gate (usually `'static`)
/// - `C`: profiling clock used to time callbacks
/// - `W`: watchdog fed by the driver loop
pub struct Scheduler<'a, 'g, C, W, const N: usize>
where
    C: ProfilingClock,
    W: Watchdog,
{
    tasks: TaskTable<'a, N>,
    gate: &'g TickGate,
    clock: C,
    watchdog: W,
    passes: u32,
}

impl<'a, 'g, C, W, const N: usize> Scheduler<'a, 'g, C, W, N>
where
    C: ProfilingClock,
    W: Watchdog,
{
    /// Create a scheduler ticking every `tick_period_us` with an empty table
    pub fn new(tick_period_us: u32, gate: &'g TickGate, clock: C, watchdog: W) -> Self {
        crate::log_info!(
            "Scheduler initialized: tick={}us slots={}",
            tick_period_us,
            N
        );

        Self {
            tasks: TaskTable::new(tick_period_us),
            gate,
            clock,
            watchdog,
            passes: 0,
        }
    }

    /// Change the tick period and end every task
    pub fn initialize(&mut self, tick_period_us: u32) {
        self.tasks.initialize(tick_period_us);
        crate::log_info!("Scheduler reinitialized: tick={}us", tick_period_us);
    }

    /// Register a task; see [`TaskTable::add_task`]
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from the table. The slot is untouched.
    #[allow(unused_variables)]
    pub fn add_task(
        &mut self,
        id: TaskId<N>,
        task: Option<&'a mut dyn Task>,
        initial_delay_us: u32,
        period_us: u32,
        repetitions: Repetitions,
    ) -> Result<(), ConfigError> {
        let result = self
            .tasks
            .add_task(id, task, initial_delay_us, period_us, repetitions);

        match &result {
            Ok(()) => crate::log_debug!(
                "Task {} added: delay={}us period={}us repetitions={}",
                id.index(),
                initial_delay_us,
                period_us,
                repetitions.count()
            ),
            Err(err) => crate::log_error!(
                "Task {} rejected: {} (delay={}us period={}us tick={}us)",
                id.index(),
                err.reason(),
                initial_delay_us,
                period_us,
                self.tasks.tick_period_us()
            ),
        }

        result
    }

    /// Resume a paused task. Returns whether the state changed.
    pub fn start_task(&mut self, id: TaskId<N>) -> bool {
        let changed = self.tasks.start_task(id);
        if changed {
            crate::log_debug!("Task {} started", id.index());
        }
        changed
    }

    /// Pause a running task. Returns whether the state changed.
    pub fn pause_task(&mut self, id: TaskId<N>) -> bool {
        let changed = self.tasks.pause_task(id);
        if changed {
            crate::log_debug!("Task {} paused", id.index());
        }
        changed
    }

    /// End a task and empty its slot
    pub fn end_task(&mut self, id: TaskId<N>) {
        self.tasks.end_task(id);
        crate::log_debug!("Task {} ended", id.index());
    }

    /// Make a task due on the next pass
    pub fn expedite_task(&mut self, id: TaskId<N>) {
        self.tasks.expedite_task(id);
        crate::log_debug!("Task {} expedited", id.index());
    }

    /// Run one dispatch pass if a tick is pending
    ///
    /// Lowers the gate after the pass. Returns whether a pass ran.
    pub fn run_pending_work(&mut self) -> bool {
        if !self.gate.is_pending() {
            return false;
        }

        let summary = self.tasks.dispatch(&self.clock);
        self.gate.clear();
        self.passes = self.passes.wrapping_add(1);

        log_pass(self.passes, &summary);
        true
    }

    /// One iteration of the driver loop: feed the watchdog, then run any
    /// pending pass
    pub fn poll(&mut self) -> bool {
        self.watchdog.feed();
        self.run_pending_work()
    }

    /// Drive the scheduler forever
    pub fn run(&mut self) -> ! {
        crate::log_info!(
            "Scheduler running: {} tasks registered",
            self.tasks.active_count()
        );

        loop {
            self.poll();
        }
    }

    /// Log the profile of every registered task. Returns the number of
    /// exhausted tasks still scheduled.
    pub fn report(&self) -> usize {
        report_task_profiles(&self.tasks)
    }

    #[inline]
    pub fn tasks(&self) -> &TaskTable<'a, N> {
        &self.tasks
    }

    #[inline]
    pub fn tasks_mut(&mut self) -> &mut TaskTable<'a, N> {
        &mut self.tasks
    }

    #[inline]
    pub fn gate(&self) -> &'g TickGate {
        self.gate
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn watchdog(&self) -> &W {
        &self.watchdog
    }

    /// Dispatch passes run since creation (wraps)
    #[inline]
    pub fn passes(&self) -> u32 {
        self.passes
    }
}

#[allow(unused_variables)]
fn log_pass(pass: u32, summary: &DispatchSummary) {
    crate::log_trace!(
        "Pass {}: fired={} exhausted={} waiting={}",
        pass,
        summary.fired,
        summary.exhausted,
        summary.waiting
    );
}
