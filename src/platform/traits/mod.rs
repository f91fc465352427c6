//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.
//! The profiling clock trait lives in `taskmaster_core::traits` and is
//! re-exported here.

pub mod watchdog;

pub use taskmaster_core::traits::ProfilingClock;
pub use watchdog::{NoWatchdog, Watchdog};
