//! Wall-clock timing helpers.
//!
//! Measurements are reported through the `log` facade at `info` level, so
//! they only show up when the host application installs a logger.

use log::info;
use std::time::{Duration, Instant};

/// A started timer.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since [`Stopwatch::start`].
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log the elapsed time under `label` and return it.
    pub fn log_elapsed(&self, label: &str) -> Duration {
        let elapsed = self.elapsed();
        info!("\"{label}\" took {:.3} s", elapsed.as_secs_f64());
        elapsed
    }
}

/// Run `f`, log how long it took under `label`, and return its output.
///
/// ```
/// use tc_core::timing::timed;
/// let sum = timed("sum", || (1..=10).sum::<i32>());
/// assert_eq!(sum, 55);
/// ```
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let watch = Stopwatch::start();
    let out = f();
    watch.log_elapsed(label);
    out
}
