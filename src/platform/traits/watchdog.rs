//! Watchdog interface trait
//!
//! The driver loop feeds the watchdog on every iteration, both while idle
//! and between dispatch passes. A task that never returns stops the feeding
//! and lets the hardware reset the system.

/// Liveness signal serviced by the driver loop
pub trait Watchdog {
    /// Restart the watchdog countdown
    fn feed(&mut self);
}

/// Watchdog for boards without one, or with it disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWatchdog;

impl Watchdog for NoWatchdog {
    #[inline]
    fn feed(&mut self) {}
}
