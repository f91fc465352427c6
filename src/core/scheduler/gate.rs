//! Pending-tick flag shared between the timer interrupt and the driver loop
//!
//! The gate is a flag, not a counter. Ticks that arrive before the current
//! pass has finished collapse into a single pending pass.

use ::core::cell::Cell;

use critical_section::Mutex;

/// Gate raised by the periodic timer and lowered after each dispatch pass
///
/// `notify` is safe to call from interrupt context. All accesses go through
/// a critical section, so targets without atomic instructions are covered.
pub struct TickGate {
    pending: Mutex<Cell<bool>>,
}

impl TickGate {
    /// Creates a lowered gate. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Raise the gate: a tick has elapsed
    #[inline]
    pub fn notify(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Whether a tick is waiting for a dispatch pass
    #[inline]
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }

    /// Lower the gate after a full dispatch pass
    #[inline]
    pub fn clear(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(false));
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate for the system tick
///
/// Applications with a single scheduler hand this to [`Scheduler::new`] and
/// call [`tick_notify`] from the timer interrupt handler.
///
/// [`Scheduler::new`]: super::Scheduler::new
pub static SCHEDULER_TICK: TickGate = TickGate::new();

/// Timer interrupt entry point: raise [`SCHEDULER_TICK`]
#[inline]
pub fn tick_notify() {
    SCHEDULER_TICK.notify();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_lowered() {
        let gate = TickGate::new();
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_notify_and_clear() {
        let gate = TickGate::new();

        gate.notify();
        assert!(gate.is_pending());

        gate.clear();
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_repeated_notify_coalesces() {
        let gate = TickGate::new();

        gate.notify();
        gate.notify();
        gate.notify();
        gate.clear();

        assert!(!gate.is_pending());
    }

    #[test]
    #[serial_test::serial]
    fn test_tick_notify_raises_system_gate() {
        SCHEDULER_TICK.clear();

        tick_notify();
        assert!(SCHEDULER_TICK.is_pending());

        SCHEDULER_TICK.clear();
    }
}
