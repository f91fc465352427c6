#![cfg_attr(not(test), no_std)]

//! taskmaster - Cooperative tick-driven periodic task scheduler
//!
//! This library wires the `taskmaster_core` dispatch engine to a platform:
//! a tick gate raised from the timer interrupt, the driver loop that
//! consumes it, watchdog servicing, logging and profile telemetry.

// Platform collaborators (watchdog, profiling clocks, tick sources)
pub mod platform;

// Scheduler driver, tick gate, telemetry and logging
pub mod core;

pub use taskmaster_core::scheduler::{
    ConfigError, DispatchSummary, Repetitions, TaskId, TaskProfile, TaskRecord, TaskState,
    TaskTable, MICROSECONDS, MILLISECONDS, SECONDS,
};
pub use taskmaster_core::traits::{ProfilingClock, Task};

pub use crate::core::scheduler::{tick_notify, Scheduler, TickGate, SCHEDULER_TICK};
