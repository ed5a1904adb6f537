//! # Constant backoff.
//!
//! [`constant`] always produces the same delay. [`once`] never produces a
//! delay at all; it exits the cycle after the first attempt.

use std::time::{Duration, Instant};

use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};

struct Constant {
    d: Duration,
}

impl Strategy for Constant {
    fn delay(&self, _attempt: u32, _start: Instant) -> Delay {
        Delay::Wait(self.d)
    }
}

/// Returns a strategy that always produces delay `d`.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use cycler::{backoff, Delay, Strategy};
///
/// let s = backoff::constant(Duration::from_millis(500));
/// assert_eq!(s.delay(1, Instant::now()), Delay::Wait(Duration::from_millis(500)));
/// assert_eq!(s.delay(9, Instant::now()), Delay::Wait(Duration::from_millis(500)));
/// ```
pub fn constant(d: Duration) -> BoxStrategy {
    Box::new(Constant { d })
}

struct Once;

impl Strategy for Once {
    fn delay(&self, _attempt: u32, _start: Instant) -> Delay {
        Delay::Exit
    }
}

/// Returns a strategy that always exits, allowing exactly one attempt.
///
/// Mostly useful for testing.
pub fn once() -> BoxStrategy {
    Box::new(Once)
}
