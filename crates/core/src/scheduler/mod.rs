//! Cooperative tick-driven task scheduler
//!
//! The scheduler owns a fixed-capacity [`TaskTable`]. Once per tick the
//! platform driver calls [`TaskTable::dispatch`], which walks every slot in
//! ascending order, counts down idle tasks and runs the ones that are due.
//! There is no preemption and no priority: a callback runs to completion
//! before the next slot is looked at.
//!
//! # Components
//!
//! - [`types`]: Slot identifiers, task state, recurrence limits, time units
//! - [`error`]: Registration errors
//! - [`table`]: Task records and the lifecycle controller
//! - [`dispatch`]: The per-tick dispatch pass
//! - [`profile`]: Min/avg/max execution time tracking
//!
//! # Example
//!
//! ```rust
//! use core::cell::Cell;
//! use taskmaster_core::scheduler::{Repetitions, TaskId, TaskTable, MILLISECONDS};
//! use taskmaster_core::traits::MockClock;
//!
//! let blinks = Cell::new(0u32);
//! let mut blink = |_elapsed_us: u32| blinks.set(blinks.get() + 1);
//!
//! let clock = MockClock::new();
//! let mut table: TaskTable<'_, 4> = TaskTable::new(MILLISECONDS);
//! table
//!     .add_task(
//!         TaskId::slot(0),
//!         Some(&mut blink),
//!         MILLISECONDS,
//!         500 * MILLISECONDS,
//!         Repetitions::Unlimited,
//!     )
//!     .expect("valid registration");
//!
//! table.dispatch(&clock);
//! assert_eq!(blinks.get(), 1);
//! ```

pub mod dispatch;
pub mod error;
pub mod profile;
pub mod table;
pub mod types;

pub use dispatch::DispatchSummary;
pub use error::ConfigError;
pub use profile::TaskProfile;
pub use table::{TaskRecord, TaskTable};
pub use types::*;
