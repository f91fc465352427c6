//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```rust,ignore
//! use taskmaster::platform::mock::{MockClock, MockWatchdog};
//! use taskmaster::platform::traits::Watchdog;
//!
//! let mut watchdog = MockWatchdog::new();
//! watchdog.feed();
//! assert_eq!(watchdog.feeds(), 1);
//!
//! let _clock = MockClock::new();
//! ```

#![cfg(any(test, feature = "mock"))]

mod watchdog;

pub use taskmaster_core::traits::MockClock;
pub use watchdog::MockWatchdog;
