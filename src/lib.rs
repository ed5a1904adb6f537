//! # cycler
//!
//! **Cycler** is a retry library for Rust built around composable backoff
//! strategies and cooperative cancellation.
//!
//! A fallible async operation is retried according to a configurable delay
//! policy until it succeeds, is explicitly aborted, or a configured limit is
//! reached. The crate targets transient-failure resilience (network calls,
//! flaky I/O) without hand-rolled delay math or cancellation plumbing.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!       constant / linear / exponential        (base strategies)
//!                     │
//!        cap ─ jitter ─ limit ─ timeout        (decorators, chain freely)
//!                     │
//!                     ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  Cycler (retry state machine)                         │
//! │  - composed Strategy (consulted per failed attempt)   │
//! │  - observer callbacks (fired before each wait)        │
//! │  - Clock (records the cycle start, injectable)        │
//! └──────────────┬────────────────────────────────────────┘
//!                ▼
//!    run(attempt) / run_with_cancellation(token, attempt)
//!
//! loop {
//!   ├─► attempt(n)                 n = 1, 2, 3, ...
//!   │     ├─ Ok                ─► done
//!   │     ├─ force_exit(cause) ─► done, surfaces cause
//!   │     └─ Err(err):
//!   │          ├─► strategy.delay(n, start)
//!   │          │     ├─ Exit       ─► done, Exhausted(err) or Canceled
//!   │          │     └─ Wait(d):
//!   │          │          ├─► observers(n, d, &err)
//!   │          │          └─► sleep(d) raced vs token
//!   │          └─► next attempt
//! }
//! ```
//!
//! ## Features
//! | Area             | Description                                             | Key items                                 |
//! |------------------|---------------------------------------------------------|-------------------------------------------|
//! | **Strategies**   | Delay algebra: bases plus cap/jitter/limit/timeout.     | [`backoff`], [`Strategy`], [`Delay`]      |
//! | **Retry cycles** | Drive an attempt to success, exhaustion, or abort.      | [`Cycler`]                                |
//! | **Errors**       | Retryable vs terminal attempts; typed cycle outcomes.   | [`AttemptError`], [`CycleError`], [`force_exit`] |
//! | **Collaborators**| Injectable time and randomness for deterministic tests. | [`Clock`], [`RandomSource`]               |
//!
//! ## Optional features
//! - `logging`: exports [`log_errors`], a stderr observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use cycler::{backoff, Cycler, ThreadRandom};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let cycler: Cycler<String> =
//!         Cycler::new(backoff::exponential(Duration::from_millis(10), 2.0))
//!             .with_jitter(0.3, ThreadRandom)
//!             .with_cap(Duration::from_millis(100))
//!             .with_limit(8)
//!             .on_error(|n, delay, err| {
//!                 eprintln!("attempt {n} failed: {err}; next try in {delay:?}");
//!             });
//!
//!     let result = cycler
//!         .run(|n| async move {
//!             if n < 3 {
//!                 return Err(format!("transient failure #{n}").into());
//!             }
//!             Ok(())
//!         })
//!         .await;
//!
//!     assert!(result.is_ok());
//! }
//! ```
//!
//! To abort a running cycle from the outside, pass a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) to
//! [`Cycler::run_with_cancellation`]; the wait between attempts is raced
//! against it, and cancellation wins immediately.

mod collab;
mod cycle;
mod error;

pub mod backoff;

// ---- Public re-exports ----

pub use backoff::{BoxStrategy, Delay, Strategy};
pub use collab::{Clock, ClockFn, RandomFn, RandomSource, SystemClock, ThreadRandom};
pub use cycle::Cycler;
pub use error::{force_exit, AttemptError, CycleError};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use cycle::log_errors;
