//! # Strategy contract for backoff algorithms.
//!
//! A [`Strategy`] maps the current attempt number (and the start time of the
//! retry cycle) to a [`Delay`]: either the duration to wait before the next
//! attempt, or [`Delay::Exit`] to end the cycle.
//!
//! ## Rules
//! - Attempt numbers are **1-based**: the initial attempt is `n = 1`.
//! - Implementations must be **stateless**: the result may depend only on the
//!   arguments and on construction-time parameters, never on prior calls.
//!   This makes a strategy (and any decorator chain built from it) safe to
//!   consult from any number of concurrent retry cycles.
//!
//! ## Composition
//! Strategies compose by wrapping: each decorator in this module owns exactly
//! one inner [`BoxStrategy`] and is itself a strategy.
//!
//! ```text
//! timeout(cap(jitter(exponential(100ms, 2.0), 0.5, ThreadRandom), 5s), 60s, SystemClock)
//!     │        │        │
//!     │        │        └─► perturbs delays, passes Exit through untouched
//!     │        └─► clamps delays to 5s
//!     └─► turns everything into Exit once 60s have elapsed
//! ```
//!
//! Chains are composed once at setup; the outermost decorator is consulted
//! first on each call, so its `Exit` short-circuits everything beneath it.

use std::time::{Duration, Instant};

/// Outcome of consulting a backoff [`Strategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delay {
    /// Wait this long before the next attempt.
    Wait(Duration),
    /// End the retry cycle: do not wait, do not attempt again.
    Exit,
}

impl Delay {
    /// Returns `true` if this value ends the retry cycle.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use cycler::Delay;
    ///
    /// assert!(Delay::Exit.is_exit());
    /// assert!(!Delay::Wait(Duration::ZERO).is_exit());
    /// ```
    pub fn is_exit(&self) -> bool {
        matches!(self, Delay::Exit)
    }
}

/// Computes the delay between consecutive attempts of a retry cycle.
///
/// `start` is the instant the cycle began; time-based strategies such as
/// [`timeout`](crate::backoff::timeout) measure elapsed time against it.
/// Stateless by contract, see the [module docs](self).
pub trait Strategy: Send + Sync {
    /// Returns the delay to apply after the `attempt`-th failure (`attempt`
    /// starts at 1), or [`Delay::Exit`] to stop the cycle.
    fn delay(&self, attempt: u32, start: Instant) -> Delay;
}

/// Owned strategy handle used for composition.
///
/// Decorator constructors consume and return this type, so a chain is built
/// by plain function nesting.
pub type BoxStrategy = Box<dyn Strategy>;
