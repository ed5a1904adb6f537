//! # Jitter decorator.
//!
//! Randomly spreads the delays of a wrapped strategy around in time to avoid
//! synchronized retries from independent cycles (thundering herd).
//!
//! For a base delay `D` and spread factor `s ∈ [0,1)`, the jittered delay is
//!
//! ```text
//! D − w + random() × (2w + 1)    where w = s × D, in nanoseconds
//! ```
//!
//! which windows the result within `[D×(1−s), D×(1+s)]` plus one nanosecond
//! of resolution noise from the `+1` term. The `+1` is kept deliberately so
//! retry timing stays bit-compatible across ports of this algorithm.
//! [`Delay::Exit`] is never perturbed.

use std::time::{Duration, Instant};

use crate::backoff::strategy::{BoxStrategy, Delay, Strategy};
use crate::collab::RandomSource;

struct Jitter<R: RandomSource> {
    inner: BoxStrategy,
    spread: f64,
    random: R,
}

impl<R: RandomSource> Strategy for Jitter<R> {
    fn delay(&self, attempt: u32, start: Instant) -> Delay {
        let base = match self.inner.delay(attempt, start) {
            Delay::Wait(d) => d,
            Delay::Exit => return Delay::Exit,
        };
        let d = base.as_nanos() as f64;
        let w = d * self.spread;
        let jittered = d - w + self.random.sample() * (2.0 * w + 1.0);
        Delay::Wait(Duration::from_nanos(jittered as u64))
    }
}

/// Wraps `inner` to randomly scatter produced delays.
///
/// The spread factor determines the relative range in which delays land: a
/// spread of `0.5` yields delays between 50% below and 50% above the wrapped
/// strategy's output. `random` supplies uniform samples in `[0,1)`; pass
/// [`ThreadRandom`](crate::ThreadRandom) unless the cycle must be
/// deterministic. If `spread` is zero, no jitter is applied and `inner` is
/// returned unchanged.
///
/// # Panics
/// Panics if `spread` does not fall in the half-open interval `[0,1)`.
pub fn jitter(inner: BoxStrategy, spread: f64, random: impl RandomSource + 'static) -> BoxStrategy {
    assert!((0.0..1.0).contains(&spread), "spread = {spread}, must be in [0,1)");
    if spread == 0.0 {
        return inner;
    }
    Box::new(Jitter { inner, spread, random })
}
