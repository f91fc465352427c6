//! Embassy-backed profiling clock and tick source
//!
//! For boards running the Embassy time driver, [`EmbassyClock`] times task
//! executions and [`tick_source`] raises the tick gate from a `Ticker`
//! instead of a dedicated timer interrupt.
//!
//! # Example
//!
//! ```rust,ignore
//! use taskmaster::platform::embassy::tick_source;
//! use taskmaster::{SCHEDULER_TICK, MILLISECONDS};
//!
//! #[embassy_executor::task]
//! async fn scheduler_tick() {
//!     tick_source(&SCHEDULER_TICK, MILLISECONDS).await
//! }
//! ```

use embassy_time::{Duration, Instant, Ticker};
use taskmaster_core::traits::ProfilingClock;

use crate::core::scheduler::TickGate;

/// Profiling clock reading the Embassy time driver
///
/// Uses the low 32 bits of the driver's tick counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl ProfilingClock for EmbassyClock {
    const WIDTH_BITS: u32 = 32;

    #[inline]
    fn now_ticks(&self) -> u32 {
        // Truncation is intended; elapsed time is computed modulo 2^32
        Instant::now().as_ticks() as u32
    }
}

/// Notify `gate` every `tick_period_us`, forever
///
/// Missed ticks are not replayed: the gate is a flag, so ticks that arrive
/// while a pass is still running coalesce.
pub async fn tick_source(gate: &TickGate, tick_period_us: u32) -> ! {
    let mut ticker = Ticker::every(Duration::from_micros(u64::from(tick_period_us)));

    crate::log_info!("Tick source started: period={}us", tick_period_us);

    loop {
        ticker.next().await;
        gate.notify();
    }
}
