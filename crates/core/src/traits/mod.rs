//! Core traits for platform-agnostic scheduling.
//!
//! This module provides trait abstractions that decouple the dispatch engine
//! from the application's tasks and from platform timers.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the `taskmaster` crate

pub mod task;
pub mod time;

pub use task::Task;
pub use time::{wrapping_elapsed, MockClock, ProfilingClock};
