//! Scheduler error types
//!
//! Registration is the only fallible scheduler operation. Control calls on a
//! slot never fail.

use core::fmt;

/// Reasons a task registration is rejected
///
/// A rejected registration leaves the target slot untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No task callback was supplied
    MissingTask,
    /// Task period is shorter than one scheduler tick
    PeriodBelowTick {
        /// Requested period (us)
        period_us: u32,
        /// Scheduler tick period (us)
        tick_us: u32,
    },
    /// Initial delay is shorter than one scheduler tick
    DelayBelowTick {
        /// Requested initial delay (us)
        delay_us: u32,
        /// Scheduler tick period (us)
        tick_us: u32,
    },
}

impl ConfigError {
    /// Short static description, usable where `Display` is not available
    pub const fn reason(&self) -> &'static str {
        match self {
            ConfigError::MissingTask => "missing task",
            ConfigError::PeriodBelowTick { .. } => "period below tick",
            ConfigError::DelayBelowTick { .. } => "initial delay below tick",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingTask => write!(f, "No task callback supplied"),
            ConfigError::PeriodBelowTick { period_us, tick_us } => write!(
                f,
                "Task period {}us is below the scheduler tick of {}us",
                period_us, tick_us
            ),
            ConfigError::DelayBelowTick { delay_us, tick_us } => write!(
                f,
                "Initial delay {}us is below the scheduler tick of {}us",
                delay_us, tick_us
            ),
        }
    }
}
