//! Task scheduler driver for periodic execution of application tasks
//!
//! A hardware timer interrupt raises the [`TickGate`] once per tick. The
//! [`Scheduler`] driver loop notices the gate, runs one dispatch pass over
//! the task table and lowers the gate again. While no tick is pending the
//! loop keeps the watchdog fed.
//!
//! # Example
//!
//! ```rust,ignore
//! use taskmaster::platform::NoWatchdog;
//! use taskmaster::{tick_notify, Repetitions, Scheduler, TaskId, MILLISECONDS, SCHEDULER_TICK};
//!
//! #[interrupt]
//! fn TIMER_IRQ_0() {
//!     // acknowledge the alarm, then:
//!     tick_notify();
//! }
//!
//! let mut heartbeat = |_elapsed_us: u32| led.toggle();
//! let mut scheduler: Scheduler<'_, '_, _, _, 8> =
//!     Scheduler::new(MILLISECONDS, &SCHEDULER_TICK, clock, NoWatchdog);
//! scheduler
//!     .add_task(
//!         TaskId::slot(0),
//!         Some(&mut heartbeat),
//!         MILLISECONDS,
//!         500 * MILLISECONDS,
//!         Repetitions::Unlimited,
//!     )
//!     .unwrap();
//! scheduler.run()
//! ```

pub mod driver;
pub mod gate;
pub mod monitor;

pub use driver::*;
pub use gate::*;
pub use monitor::*;
pub use taskmaster_core::scheduler::*;
