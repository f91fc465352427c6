//! taskmaster_core - Pure no_std dispatch engine for the taskmaster scheduler
//!
//! This crate contains the platform-agnostic part of the scheduler: the
//! fixed task table, the per-tick dispatch pass, the lifecycle controls and
//! the execution-time profiler. It can be tested on host without any feature
//! flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies, no heap
//! - **Trait abstractions**: Task callbacks and the profiling clock are
//!   injected via traits
//!
//! # Modules
//!
//! - [`scheduler`]: Task table, lifecycle controller, dispatch loop, profiler
//! - [`traits`]: Platform-agnostic trait abstractions (Task, ProfilingClock)

#![no_std]

pub mod scheduler;
pub mod traits;
