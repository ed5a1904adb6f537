//! # Simple logging observer for debugging and demos.
//!
//! [`log_errors`] prints retried failures to stderr in a human-readable
//! format. Primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [retry] attempt=1 delay=100ms err="connection refused"
//! [retry] attempt=2 delay=200ms err="connection refused"
//! ```

use std::fmt::Display;
use std::time::Duration;

/// Stderr logging observer.
///
/// Enabled via the `logging` feature. Pass it to
/// [`Cycler::on_error`](crate::Cycler::on_error) to print every retried
/// failure. Not intended for production use; register a custom observer for
/// structured logging or metrics collection.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use cycler::{backoff, Cycler};
///
/// let cycler: Cycler<String> = Cycler::new(backoff::constant(Duration::from_millis(100)))
///     .with_limit(3)
///     .on_error(cycler::log_errors);
/// ```
pub fn log_errors<E: Display>(attempt: u32, delay: Duration, err: &E) {
    eprintln!("[retry] attempt={attempt} delay={delay:?} err=\"{err}\"");
}
