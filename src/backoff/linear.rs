//! # Linear backoff.
//!
//! Delays grow (or shrink) in fixed steps: `d + k × (n − 1)`, where `k` is a
//! signed slope in seconds per attempt. A negative slope shrinks the delay
//! down to zero and no further.

use std::time::{Duration, Instant};

use crate::backoff::constant::constant;
use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};

struct Linear {
    d: Duration,
    k: f64,
}

impl Strategy for Linear {
    fn delay(&self, attempt: u32, _start: Instant) -> Delay {
        let secs = self.d.as_secs_f64() + self.k * f64::from(attempt.saturating_sub(1));
        if secs <= 0.0 {
            return Delay::Wait(Duration::ZERO);
        }
        Delay::Wait(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }
}

/// Returns a strategy producing delays that grow linearly in steps of `k`
/// seconds, starting from the initial delay `d`.
///
/// If `k` is negative, delays shrink to zero and then stop decreasing. If
/// `k == 0`, the result degrades to [`constant(d)`](constant). Delays that
/// exceed the representable range saturate to [`Duration::MAX`].
///
/// # Panics
/// Panics if `k` is not finite.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use cycler::{backoff, Delay, Strategy};
///
/// let s = backoff::linear(Duration::from_secs(1), 2.0);
/// let start = Instant::now();
/// assert_eq!(s.delay(1, start), Delay::Wait(Duration::from_secs(1)));
/// assert_eq!(s.delay(2, start), Delay::Wait(Duration::from_secs(3)));
/// assert_eq!(s.delay(3, start), Delay::Wait(Duration::from_secs(5)));
/// ```
pub fn linear(d: Duration, k: f64) -> BoxStrategy {
    assert!(k.is_finite(), "slope k = {k}, must be finite");
    if k == 0.0 {
        return constant(d);
    }
    Box::new(Linear { d, k })
}
