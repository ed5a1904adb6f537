//! # Backoff strategies and decorators.
//!
//! This module groups the delay algebra consulted by a
//! [`Cycler`](crate::Cycler) between attempts.
//!
//! ## Contents
//! - [`Strategy`] / [`Delay`] — the contract: attempt number in, delay or
//!   [`Delay::Exit`] out.
//! - Base strategies: [`constant`], [`linear`], [`exponential`], plus the
//!   [`once`] test helper.
//! - Decorators: [`cap`], [`jitter`], [`limit`], [`timeout`] — each wraps one
//!   inner strategy and is itself a strategy, so chains compose freely.
//!
//! ## Quick wiring
//! ```text
//! Cycler::new(strategy)
//!   .with_cap(..)      ─► cap(strategy, ..)
//!   .with_jitter(..)   ─► jitter(strategy, .., random)
//!   .with_limit(..)    ─► limit(strategy, ..)
//!   .with_timeout(..)  ─► timeout(strategy, .., clock)
//! ```
//!
//! Disabling parameters (zero cap, zero spread, zero limit, zero timeout)
//! return the inner strategy unchanged: no wrapper is allocated, and the
//! cycle behaves as if the decorator had never been requested.

mod cap;
mod constant;
mod exponential;
mod jitter;
mod limit;
mod linear;
mod strategy;
mod timeout;

pub use cap::cap;
pub use constant::{constant, once};
pub use exponential::exponential;
pub use jitter::jitter;
pub use limit::limit;
pub use linear::linear;
pub use strategy::{BoxStrategy, Delay, Strategy};
pub use timeout::timeout;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{ClockFn, RandomFn};
    use std::time::{Duration, Instant};

    #[test]
    fn test_chain_composes_outermost_first() {
        // timeout(cap(jitter(exponential))) — the usual full stack.
        let base = Instant::now();
        let s = timeout(
            cap(
                jitter(
                    exponential(Duration::from_secs(1), 2.0),
                    0.5,
                    RandomFn(|| 0.0),
                ),
                Duration::from_secs(3),
            ),
            Duration::from_secs(60),
            ClockFn(move || base + Duration::from_secs(1)),
        );

        // n = 3: exponential 4s, jitter at the lower edge halves it to 2s, under the cap.
        assert_eq!(s.delay(3, base), Delay::Wait(Duration::from_secs(2)));
        // n = 5: exponential 16s, jittered to 8s, capped to 3s.
        assert_eq!(s.delay(5, base), Delay::Wait(Duration::from_secs(3)));
    }

    #[test]
    fn test_outer_exit_short_circuits_inner() {
        let base = Instant::now();
        let s = timeout(
            jitter(
                constant(Duration::from_secs(1)),
                0.5,
                RandomFn(|| -> f64 { panic!("inner consulted") }),
            ),
            Duration::from_secs(2),
            ClockFn(move || base + Duration::from_secs(5)),
        );
        assert_eq!(s.delay(1, base), Delay::Exit);
    }

    #[test]
    fn test_limit_inside_jitter_exit_passes_through() {
        // Jitter wrapping a limited strategy must not perturb its Exit.
        let s = jitter(
            limit(constant(Duration::from_secs(1)), 2),
            0.9,
            RandomFn(|| 0.99),
        );
        assert_eq!(s.delay(2, Instant::now()), Delay::Exit);
    }
}
