//! Execution time profiling
//!
//! Every firing of a task is timed with the platform profiling clock and the
//! sample is folded into the slot's [`TaskProfile`]. Samples are raw clock
//! ticks, not microseconds.

/// Min/avg/max execution time of a task, in profiling clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskProfile {
    /// Shortest observed execution
    pub min_ticks: u32,
    /// Streaming mean of all executions
    pub avg_ticks: u32,
    /// Longest observed execution
    pub max_ticks: u32,
}

impl TaskProfile {
    /// Profile of an empty slot
    pub const EMPTY: Self = Self {
        min_ticks: 0,
        avg_ticks: 0,
        max_ticks: 0,
    };

    /// Profile of a freshly registered task
    ///
    /// `min_ticks` starts at the largest value so the first sample replaces it.
    pub const fn new() -> Self {
        Self {
            min_ticks: u32::MAX,
            avg_ticks: 0,
            max_ticks: 0,
        }
    }

    /// Fold one execution sample into the profile
    ///
    /// `run_count` is the task's run counter including this execution. The
    /// mean is updated incrementally as `avg + (sample - avg) / run_count`
    /// with division truncating toward zero, so early samples carry a small
    /// downward or upward bias compared to the exact mean.
    pub fn record(&mut self, elapsed_ticks: u32, run_count: u32) {
        if elapsed_ticks < self.min_ticks {
            self.min_ticks = elapsed_ticks;
        }

        if elapsed_ticks > self.max_ticks {
            self.max_ticks = elapsed_ticks;
        }

        let avg = i64::from(self.avg_ticks);
        let step = (i64::from(elapsed_ticks) - avg) / i64::from(run_count.max(1));
        // avg + step stays between the old mean and the sample
        self.avg_ticks = (avg + step) as u32;
    }

    /// Whether at least one sample has been recorded since registration
    #[inline]
    pub const fn has_samples(&self) -> bool {
        self.min_ticks <= self.max_ticks
    }
}

impl Default for TaskProfile {
    fn default() -> Self {
        Self::new()
    }
}
