//! # Exponential backoff.
//!
//! Delays grow (m > 1) or shrink (m < 1) geometrically: `d × m^(n − 1)`.
//! The computation is carried out in `f64` seconds; results beyond the
//! representable range saturate to [`Duration::MAX`] rather than wrapping.

use std::time::{Duration, Instant};

use crate::backoff::constant::constant;
use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};

struct Exponential {
    d: Duration,
    m: f64,
}

impl Strategy for Exponential {
    fn delay(&self, attempt: u32, _start: Instant) -> Delay {
        let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let secs = self.d.as_secs_f64() * self.m.powi(exp);
        Delay::Wait(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }
}

/// Returns a strategy producing delays that grow (`m > 1`) or shrink
/// (`m < 1`) by the factor `m`, starting from the initial delay `d`.
///
/// Degenerate parameters collapse to [`constant`]: `m == 1` yields
/// `constant(d)`, and `d == 0` or `m == 0` yields `constant(0)`. Delays that
/// overflow the representable range saturate to [`Duration::MAX`]; this is a
/// fixed design choice, not configurable.
///
/// # Panics
/// Panics if `m` is negative or NaN.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use cycler::{backoff, Delay, Strategy};
///
/// let s = backoff::exponential(Duration::from_secs(1), 2.0);
/// let start = Instant::now();
/// assert_eq!(s.delay(1, start), Delay::Wait(Duration::from_secs(1)));
/// assert_eq!(s.delay(2, start), Delay::Wait(Duration::from_secs(2)));
/// assert_eq!(s.delay(3, start), Delay::Wait(Duration::from_secs(4)));
/// assert_eq!(s.delay(4, start), Delay::Wait(Duration::from_secs(8)));
/// ```
pub fn exponential(d: Duration, m: f64) -> BoxStrategy {
    assert!(m >= 0.0, "multiplier m = {m}, must be >= 0");
    if d == Duration::ZERO || m == 0.0 {
        return constant(Duration::ZERO);
    }
    if m == 1.0 {
        return constant(d);
    }
    Box::new(Exponential { d, m })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling_sequence() {
        let s = exponential(Duration::from_secs(1), 2.0);
        let start = Instant::now();
        assert_eq!(s.delay(1, start), Delay::Wait(Duration::from_secs(1)));
        assert_eq!(s.delay(2, start), Delay::Wait(Duration::from_secs(2)));
        assert_eq!(s.delay(3, start), Delay::Wait(Duration::from_secs(4)));
        assert_eq!(s.delay(4, start), Delay::Wait(Duration::from_secs(8)));
    }

    #[test]
    fn test_shrinking_multiplier() {
        let s = exponential(Duration::from_secs(8), 0.5);
        let start = Instant::now();
        assert_eq!(s.delay(1, start), Delay::Wait(Duration::from_secs(8)));
        assert_eq!(s.delay(2, start), Delay::Wait(Duration::from_secs(4)));
        assert_eq!(s.delay(4, start), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_multiplier_one_is_constant() {
        let s = exponential(Duration::from_millis(300), 1.0);
        let start = Instant::now();
        for attempt in 1..=8 {
            assert_eq!(s.delay(attempt, start), Delay::Wait(Duration::from_millis(300)));
        }
    }

    #[test]
    fn test_zero_base_is_constant_zero() {
        let s = exponential(Duration::ZERO, 2.0);
        assert_eq!(s.delay(5, Instant::now()), Delay::Wait(Duration::ZERO));
    }

    #[test]
    fn test_zero_multiplier_is_constant_zero() {
        let s = exponential(Duration::from_secs(1), 0.0);
        assert_eq!(s.delay(5, Instant::now()), Delay::Wait(Duration::ZERO));
    }

    #[test]
    fn test_overflow_saturates() {
        let s = exponential(Duration::from_secs(1), 10.0);
        assert_eq!(s.delay(1000, Instant::now()), Delay::Wait(Duration::MAX));
        assert_eq!(s.delay(u32::MAX, Instant::now()), Delay::Wait(Duration::MAX));
    }

    #[test]
    #[should_panic(expected = "must be >= 0")]
    fn test_negative_multiplier_panics() {
        let _ = exponential(Duration::from_secs(1), -1.0);
    }

    #[test]
    #[should_panic(expected = "must be >= 0")]
    fn test_nan_multiplier_panics() {
        let _ = exponential(Duration::from_secs(1), f64::NAN);
    }
}
