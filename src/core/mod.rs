//! Core scheduler functionality
//!
//! This module contains the platform-facing half of the scheduler: the tick
//! gate, the driver loop, profile reporting and the logging macros.

pub mod logging;
pub mod scheduler;
