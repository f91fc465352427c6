//! Task callback abstraction.

/// A unit of periodic work
///
/// The scheduler calls [`Task::run`] every time the task is due, passing the
/// task's nominal period in microseconds as the time elapsed since the
/// previous call. Any `FnMut(u32)` closure is a `Task`.
///
/// Tasks run to completion on the dispatch context. A task that never
/// returns stalls every other task.
///
/// # Example
///
/// ```
/// use taskmaster_core::traits::Task;
///
/// struct Odometer {
///     distance_mm: u32,
///     speed_mm_per_s: u32,
/// }
///
/// impl Task for Odometer {
///     fn run(&mut self, elapsed_us: u32) {
///         self.distance_mm += self.speed_mm_per_s * elapsed_us / 1_000_000;
///     }
/// }
///
/// let mut odometer = Odometer { distance_mm: 0, speed_mm_per_s: 200 };
/// odometer.run(500_000);
/// assert_eq!(odometer.distance_mm, 100);
/// ```
pub trait Task {
    /// Perform one execution. `elapsed_us` is the task period.
    fn run(&mut self, elapsed_us: u32);
}

impl<F> Task for F
where
    F: FnMut(u32),
{
    fn run(&mut self, elapsed_us: u32) {
        self(elapsed_us)
    }
}
