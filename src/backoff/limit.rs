//! # Attempt-limit decorator.
//!
//! Ends the retry cycle after a fixed number of attempts.

use std::time::Instant;

use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};

struct Limit {
    inner: BoxStrategy,
    n: u32,
}

impl Strategy for Limit {
    fn delay(&self, attempt: u32, start: Instant) -> Delay {
        if attempt >= self.n {
            return Delay::Exit;
        }
        self.inner.delay(attempt, start)
    }
}

/// Wraps `inner` to end the retry cycle after `n` attempts.
///
/// Attempt numbers are 1-based, so `limit(s, 3)` allows attempts 1 through 3
/// and exits when consulted after the third. If `n` is zero, no limit is
/// applied and `inner` is returned unchanged.
pub fn limit(inner: BoxStrategy, n: u32) -> BoxStrategy {
    if n < 1 {
        return inner;
    }
    Box::new(Limit { inner, n })
}
