//! # Cycler: the retry cycle state machine.
//!
//! A [`Cycler`] repeatedly executes a caller-supplied attempt until it
//! succeeds, the strategy exits, a terminal error forces an exit, or the
//! cancellation token fires.
//!
//! ## Cycle lifecycle
//! ```text
//! run() / run_with_cancellation(token)
//!
//! start = clock.now()
//! loop {
//!   ├─► attempt += 1
//!   ├─► attempt(n)
//!   │     ├─ Ok                ─► return Ok(())
//!   │     ├─ Terminal(cause)   ─► return Err(Terminal(cause))
//!   │     └─ Retryable(err):
//!   │          ├─► delay = strategy.delay(n, start)
//!   │          ├─ Exit ─► return Err(Canceled) if token already fired
//!   │          │          else   Err(Exhausted(err))
//!   │          └─ Wait(delay):
//!   │               ├─► notify observers (n, delay, &err), in order
//!   │               └─► race sleep(delay) vs token.cancelled()
//!   │                     ├─ token wins ─► return Err(Canceled)
//!   │                     └─ sleep wins ─► continue
//! }
//! ```
//!
//! ## Rules
//! - The attempt runs **at least once**, even with a pre-cancelled token.
//! - Attempts run **sequentially**; the cycle performs no internal
//!   parallelism and suspends only at the wait step.
//! - Cancellation is cooperative: it is observed at the strategy exit and
//!   during the wait, never mid-attempt. A running attempt always completes.
//! - Observers fire strictly after the strategy has decided to continue and
//!   strictly before the wait begins; never for the attempt that succeeds,
//!   exits the strategy, or returns a terminal error.
//! - A cycle with neither [`with_limit`](Cycler::with_limit) nor
//!   [`with_timeout`](Cycler::with_timeout) and an attempt that never
//!   succeeds runs forever. That is the contract, not a bug.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::backoff::{self, BoxStrategy, Delay};
use crate::collab::{Clock, RandomSource, SystemClock};
use crate::error::{AttemptError, CycleError};

type HandlerRef<E> = Arc<dyn Fn(u32, Duration, &E) + Send + Sync>;

/// Schedules retry cycles in which an attempt is repeatedly executed until
/// it succeeds.
///
/// A `Cycler` is configured once, up front, through its `with_*` builder
/// methods, and is then reusable: any number of runs, sequential or
/// concurrent, may share the same value. No run-scoped state lives on the
/// struct; counters and timers belong to the running call.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use cycler::{backoff, AttemptError, Cycler};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let cycler: Cycler<String> = Cycler::new(backoff::constant(Duration::from_millis(1)))
///     .with_limit(5);
///
/// let result = cycler
///     .run(|n| async move {
///         if n < 3 {
///             return Err(format!("transient #{n}").into());
///         }
///         Ok(())
///     })
///     .await;
///
/// assert!(result.is_ok());
/// # }
/// ```
pub struct Cycler<E> {
    strategy: BoxStrategy,
    handlers: Vec<HandlerRef<E>>,
    clock: Arc<dyn Clock>,
}

impl<E> Cycler<E> {
    /// Creates a new cycler driven by the given backoff strategy.
    ///
    /// The cycle clock defaults to [`SystemClock`]; override it with
    /// [`with_clock`](Cycler::with_clock) or implicitly via
    /// [`with_timeout`](Cycler::with_timeout).
    pub fn new(strategy: BoxStrategy) -> Self {
        Self {
            strategy,
            handlers: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Caps the delay between consecutive attempts at `max`.
    ///
    /// Delegates to [`backoff::cap`]: a zero `max` applies no cap. Calling
    /// this repeatedly stacks decorators; the last-applied cap wins.
    pub fn with_cap(mut self, max: Duration) -> Self {
        self.strategy = backoff::cap(self.strategy, max);
        self
    }

    /// Randomly spreads delays between consecutive attempts around in time.
    ///
    /// Delegates to [`backoff::jitter`]: `spread` must fall in `[0,1)` (a
    /// construction panic otherwise) and a zero spread applies no jitter.
    /// Pass [`ThreadRandom`](crate::ThreadRandom) unless the run must be
    /// deterministic.
    pub fn with_jitter(mut self, spread: f64, random: impl RandomSource + 'static) -> Self {
        self.strategy = backoff::jitter(self.strategy, spread, random);
        self
    }

    /// Stops retry cycles after `n` attempts.
    ///
    /// Delegates to [`backoff::limit`]: a zero `n` applies no limit.
    pub fn with_limit(mut self, n: u32) -> Self {
        self.strategy = backoff::limit(self.strategy, n);
        self
    }

    /// Stops retry cycles once `limit` has elapsed since the cycle started.
    ///
    /// Delegates to [`backoff::timeout`]: a zero `limit` applies no timeout.
    /// When the timeout is enabled, `clock` also becomes the cycle clock, so
    /// the decorator and the cycle measure elapsed time against the same
    /// source.
    pub fn with_timeout(mut self, limit: Duration, clock: impl Clock + 'static) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(clock);
        self.strategy = backoff::timeout(self.strategy, limit, clock.clone());
        if limit > Duration::ZERO {
            self.clock = clock;
        }
        self
    }

    /// Overrides the clock used to record the start time of each run.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Registers an observer invoked when a failed attempt is about to be
    /// retried.
    ///
    /// Observers receive the attempt number, the computed delay, and the
    /// error, and fire synchronously in registration order before the wait
    /// begins. Typically they log intermediate errors that would otherwise
    /// go unseen. Register observers during setup, before the first run.
    pub fn on_error<H>(mut self, handler: H) -> Self
    where
        H: Fn(u32, Duration, &E) + Send + Sync + 'static,
    {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Runs a retry cycle with a token that never fires.
    ///
    /// Equivalent to [`run_with_cancellation`](Cycler::run_with_cancellation)
    /// with a fresh, never-cancelled token. Cycles with neither a limit nor
    /// a timeout run until the attempt succeeds.
    pub async fn run<F, Fut>(&self, attempt: F) -> Result<(), CycleError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<(), AttemptError<E>>>,
    {
        self.run_with_cancellation(CancellationToken::new(), attempt).await
    }

    /// Runs a retry cycle in which `attempt` is repeatedly executed until it
    /// returns `Ok`.
    ///
    /// The cycle stops early if the strategy exits
    /// ([`CycleError::Exhausted`]), an attempt returns a terminal error
    /// ([`CycleError::Terminal`]), or `token` is cancelled
    /// ([`CycleError::Canceled`]). If the token has fired by the time the
    /// strategy exits, cancellation takes precedence over exhaustion.
    ///
    /// `attempt` receives the 1-based attempt number and is executed at
    /// least once, even if `token` is already cancelled on entry.
    pub async fn run_with_cancellation<F, Fut>(
        &self,
        token: CancellationToken,
        mut attempt: F,
    ) -> Result<(), CycleError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<(), AttemptError<E>>>,
    {
        let start = self.clock.now();
        let mut n: u32 = 0;

        loop {
            n += 1;

            let err = match attempt(n).await {
                Ok(()) => return Ok(()),
                Err(AttemptError::Terminal(cause)) => return Err(CycleError::Terminal(cause)),
                Err(AttemptError::Retryable(err)) => err,
            };

            let delay = match self.strategy.delay(n, start) {
                Delay::Exit => {
                    return if token.is_cancelled() {
                        Err(CycleError::Canceled)
                    } else {
                        Err(CycleError::Exhausted(err))
                    };
                }
                Delay::Wait(delay) => delay,
            };

            for handler in &self.handlers {
                handler(n, delay, &err);
            }

            // The timer is scoped to this iteration; whichever branch loses
            // the race is dropped with it.
            let sleep = time::sleep(delay);
            tokio::pin!(sleep);
            select! {
                _ = &mut sleep => {}
                _ = token.cancelled() => return Err(CycleError::Canceled),
            }
        }
    }
}
