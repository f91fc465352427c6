//! Platform abstraction layer
//!
//! This module holds the collaborators the scheduler consumes but does not
//! own: the watchdog serviced while idle, the profiling clock and the
//! periodic tick source. Timer register setup and interrupt vector wiring
//! stay in the application.

pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use traits::{NoWatchdog, Watchdog};
