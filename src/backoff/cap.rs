//! # Delay cap decorator.
//!
//! Clamps the delays of a wrapped strategy to an upper bound. [`Delay::Exit`]
//! passes through untouched.

use std::time::{Duration, Instant};

use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};

struct Cap {
    inner: BoxStrategy,
    max: Duration,
}

impl Strategy for Cap {
    fn delay(&self, attempt: u32, start: Instant) -> Delay {
        match self.inner.delay(attempt, start) {
            Delay::Wait(d) => Delay::Wait(d.min(self.max)),
            Delay::Exit => Delay::Exit,
        }
    }
}

/// Wraps `inner` so that produced delays never exceed `max`.
///
/// If `max` is zero, no cap is applied and `inner` is returned unchanged.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use cycler::{backoff, Delay, Strategy};
///
/// let s = backoff::cap(backoff::exponential(Duration::from_secs(1), 2.0), Duration::from_secs(3));
/// let start = Instant::now();
/// assert_eq!(s.delay(2, start), Delay::Wait(Duration::from_secs(2)));
/// assert_eq!(s.delay(4, start), Delay::Wait(Duration::from_secs(3))); // capped
/// ```
pub fn cap(inner: BoxStrategy, max: Duration) -> BoxStrategy {
    if max == Duration::ZERO {
        return inner;
    }
    Box::new(Cap { inner, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff::{constant, once};

    #[test]
    fn test_below_cap_passes_through() {
        let s = cap(constant(Duration::from_secs(1)), Duration::from_secs(2));
        assert_eq!(s.delay(1, Instant::now()), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_above_cap_is_clamped() {
        let s = cap(constant(Duration::from_secs(2)), Duration::from_secs(1));
        assert_eq!(s.delay(1, Instant::now()), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_zero_cap_is_noop() {
        let s = cap(constant(Duration::from_secs(1)), Duration::ZERO);
        assert_eq!(s.delay(1, Instant::now()), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_exit_passes_through() {
        let s = cap(once(), Duration::from_secs(1));
        assert_eq!(s.delay(1, Instant::now()), Delay::Exit);
    }
}
