//! # Clock collaborator.
//!
//! Time never comes from a hidden global: the cycle and the
//! [`timeout`](crate::backoff::timeout) decorator read it through [`Clock`],
//! so tests can pin the passage of time.

use std::sync::Arc;
use std::time::Instant;

/// Supplies the current time for time-based retry logic.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]. The default for a
/// [`Cycler`](crate::Cycler).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Function-backed [`Clock`].
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use cycler::{Clock, ClockFn};
///
/// let base = Instant::now();
/// let frozen = ClockFn(move || base + Duration::from_secs(5));
/// assert_eq!(frozen.now(), base + Duration::from_secs(5));
/// ```
pub struct ClockFn<F>(pub F);

impl<F> Clock for ClockFn<F>
where
    F: Fn() -> Instant + Send + Sync,
{
    fn now(&self) -> Instant {
        (self.0)()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_shared_clock_through_arc() {
        let base = Instant::now();
        let clock: Arc<dyn Clock> = Arc::new(ClockFn(move || base));
        assert_eq!(clock.now(), base);
        assert_eq!(clock.clone().now(), base);
    }
}
