//! Profiling clock abstraction.
//!
//! The dispatch pass timestamps every task execution with a free-running
//! hardware counter. Counters are often narrower than 32 bits and wrap
//! frequently, so durations are computed with modular subtraction on the
//! counter's width.

use core::cell::Cell;

/// Free-running counter used to time task executions.
///
/// This trait abstracts over different counters:
/// - `EmbassyClock` (in the `taskmaster` crate) on Embassy targets
/// - [`MockClock`] for host testing with controllable time
///
/// # Example
///
/// ```
/// use taskmaster_core::traits::{MockClock, ProfilingClock};
///
/// let clock = MockClock::<16>::starting_at(0xFFF0);
/// let start = clock.now_ticks();
/// clock.advance(0x20);
/// let end = clock.now_ticks();
///
/// assert_eq!(end, 0x0010);
/// assert_eq!(clock.elapsed_between(start, end), 0x20);
/// ```
pub trait ProfilingClock {
    /// Number of significant bits in the counter (1-32)
    const WIDTH_BITS: u32 = 32;

    /// Current counter value. Only the low `WIDTH_BITS` bits are meaningful.
    fn now_ticks(&self) -> u32;

    /// Ticks from `start` to `end`, tolerating one counter wrap
    fn elapsed_between(&self, start: u32, end: u32) -> u32 {
        wrapping_elapsed(start, end, Self::WIDTH_BITS)
    }
}

impl<T: ProfilingClock> ProfilingClock for &T {
    const WIDTH_BITS: u32 = T::WIDTH_BITS;

    #[inline]
    fn now_ticks(&self) -> u32 {
        (**self).now_ticks()
    }
}

/// Modular difference `end - start` on a counter `width_bits` wide
#[inline]
pub const fn wrapping_elapsed(start: u32, end: u32, width_bits: u32) -> u32 {
    end.wrapping_sub(start) & counter_mask(width_bits)
}

#[inline]
const fn counter_mask(width_bits: u32) -> u32 {
    if width_bits >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << width_bits) - 1
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock profiling counter with controllable time advancement.
///
/// `WIDTH_BITS` selects the simulated counter width so wrap-around can be
/// exercised. Tasks under test typically hold a shared reference to the
/// clock and call [`MockClock::advance`] to simulate their own run time.
#[derive(Debug, Default)]
pub struct MockClock<const WIDTH_BITS: u32 = 32> {
    ticks: Cell<u32>,
}

impl MockClock {
    /// Creates a 32-bit mock counter starting at 0.
    pub const fn new() -> Self {
        Self {
            ticks: Cell::new(0),
        }
    }
}

impl<const WIDTH_BITS: u32> MockClock<WIDTH_BITS> {
    /// Creates a mock counter starting at the specified value.
    pub const fn starting_at(ticks: u32) -> Self {
        Self {
            ticks: Cell::new(ticks & counter_mask(WIDTH_BITS)),
        }
    }

    /// Sets the counter to an absolute value.
    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks & counter_mask(WIDTH_BITS));
    }

    /// Advances the counter, wrapping at the counter width.
    pub fn advance(&self, ticks: u32) {
        self.set(self.ticks.get().wrapping_add(ticks));
    }
}

impl<const W: u32> ProfilingClock for MockClock<W> {
    const WIDTH_BITS: u32 = W;

    fn now_ticks(&self) -> u32 {
        self.ticks.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
