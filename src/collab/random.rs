//! # Random collaborator.
//!
//! Randomness for [`jitter`](crate::backoff::jitter) is drawn through
//! [`RandomSource`] rather than a process-global generator, so deterministic
//! tests can pin every sample.

use std::sync::Arc;

use rand::Rng;

/// Supplies uniform pseudo-random samples in the half-open interval `[0,1)`.
pub trait RandomSource: Send + Sync {
    /// Returns the next sample in `[0,1)`.
    fn sample(&self) -> f64;
}

/// Default source drawing from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn sample(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Function-backed [`RandomSource`].
///
/// # Example
/// ```
/// use cycler::{RandomFn, RandomSource};
///
/// let pinned = RandomFn(|| 0.25);
/// assert_eq!(pinned.sample(), 0.25);
/// ```
pub struct RandomFn<F>(pub F);

impl<F> RandomSource for RandomFn<F>
where
    F: Fn() -> f64 + Send + Sync,
{
    fn sample(&self) -> f64 {
        (self.0)()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Arc<R> {
    fn sample(&self) -> f64 {
        (**self).sample()
    }
}
