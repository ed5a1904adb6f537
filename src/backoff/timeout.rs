//! # Wall-clock timeout decorator.
//!
//! Ends the retry cycle once the time elapsed since the cycle started reaches
//! a limit. Elapsed time is measured against an injected [`Clock`], so tests
//! can pin it.

use std::time::{Duration, Instant};

use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};
use crate::collab::Clock;

struct Timeout<C: Clock> {
    inner: BoxStrategy,
    limit: Duration,
    clock: C,
}

impl<C: Clock> Strategy for Timeout<C> {
    fn delay(&self, attempt: u32, start: Instant) -> Delay {
        // Inclusive boundary: elapsed == limit already exits.
        if self.clock.now().saturating_duration_since(start) >= self.limit {
            return Delay::Exit;
        }
        self.inner.delay(attempt, start)
    }
}

/// Wraps `inner` to end the retry cycle once `limit` has elapsed since the
/// cycle's start, as measured by `clock`.
///
/// The boundary is inclusive: a cycle whose elapsed time equals `limit`
/// exactly is over. If `limit` is zero, no timeout is applied and `inner` is
/// returned unchanged.
pub fn timeout(inner: BoxStrategy, limit: Duration, clock: impl Clock + 'static) -> BoxStrategy {
    if limit == Duration::ZERO {
        return inner;
    }
    Box::new(Timeout { inner, limit, clock })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff::constant;
    use crate::collab::ClockFn;

    #[test]
    fn test_delegates_before_limit() {
        let base = Instant::now();
        let s = timeout(
            constant(Duration::from_secs(1)),
            Duration::from_secs(2),
            ClockFn(move || base + Duration::from_secs(1)),
        );
        assert_eq!(s.delay(1, base), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let base = Instant::now();
        let s = timeout(
            constant(Duration::from_secs(1)),
            Duration::from_secs(2),
            ClockFn(move || base + Duration::from_secs(2)),
        );
        assert_eq!(s.delay(1, base), Delay::Exit);
    }

    #[test]
    fn test_one_nanosecond_short_still_waits() {
        let base = Instant::now();
        let s = timeout(
            constant(Duration::from_secs(1)),
            Duration::from_secs(2),
            ClockFn(move || base + Duration::from_secs(2) - Duration::from_nanos(1)),
        );
        assert_eq!(s.delay(1, base), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_past_limit_exits() {
        let base = Instant::now();
        let s = timeout(
            constant(Duration::from_secs(1)),
            Duration::from_secs(2),
            ClockFn(move || base + Duration::from_secs(10)),
        );
        assert_eq!(s.delay(1, base), Delay::Exit);
    }

    #[test]
    fn test_zero_limit_is_noop() {
        let base = Instant::now();
        let s = timeout(
            constant(Duration::from_secs(1)),
            Duration::ZERO,
            ClockFn(move || base + Duration::from_secs(100)),
        );
        assert_eq!(s.delay(1, base), Delay::Wait(Duration::from_secs(1)));
    }

    #[test]
    fn test_clock_behind_start_does_not_panic() {
        let base = Instant::now() + Duration::from_secs(60);
        let s = timeout(
            constant(Duration::from_secs(1)),
            Duration::from_secs(2),
            ClockFn(Instant::now),
        );
        assert_eq!(s.delay(1, base), Delay::Wait(Duration::from_secs(1)));
    }
}
