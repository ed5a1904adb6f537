//! # Error types for attempts and retry cycles.
//!
//! This module defines two enums:
//!
//! - [`AttemptError`] — how a single attempt reports failure: retryable per
//!   the strategy, or terminal ([`force_exit`]) to end the cycle on the spot.
//! - [`CycleError`] — the terminal outcome of a whole run: policy exhaustion,
//!   a forced exit, or cancellation.
//!
//! Both are generic over the caller's error type `E`; the crate never
//! inspects or classifies `E` itself. Every error an attempt returns is
//! retryable unless the attempt explicitly marks it terminal.

use thiserror::Error;

/// # Failure reported by a single attempt.
///
/// `From<E>` wraps into [`AttemptError::Retryable`], so ordinary errors
/// propagate with `?` and only terminal ones need explicit marking:
///
/// ```
/// use cycler::{force_exit, AttemptError};
///
/// fn attempt(n: u32) -> Result<(), AttemptError<&'static str>> {
///     if n > 5 {
///         return Err(force_exit("gave up"));
///     }
///     Err("connection refused")? // wraps as Retryable
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError<E> {
    /// The attempt failed but may succeed if retried.
    #[error("attempt failed: {0}")]
    Retryable(E),

    /// The attempt failed and the cycle must stop immediately. Bypasses the
    /// strategy and all observers; the cycle surfaces the wrapped cause.
    #[error("attempt failed terminally: {0}")]
    Terminal(E),
}

impl<E> AttemptError<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            AttemptError::Retryable(_) => "attempt_retryable",
            AttemptError::Terminal(_) => "attempt_terminal",
        }
    }

    /// Indicates whether the cycle is allowed to retry after this error.
    ///
    /// # Example
    /// ```
    /// use cycler::{force_exit, AttemptError};
    ///
    /// assert!(AttemptError::Retryable("boom").is_retryable());
    /// assert!(!force_exit("boom").is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, AttemptError::Retryable(_))
    }

    /// Consumes the wrapper and returns the underlying cause.
    pub fn into_inner(self) -> E {
        match self {
            AttemptError::Retryable(e) | AttemptError::Terminal(e) => e,
        }
    }
}

impl<E> From<E> for AttemptError<E> {
    fn from(e: E) -> Self {
        AttemptError::Retryable(e)
    }
}

/// Wraps an error to force immediate termination of the retry cycle.
///
/// The cycle returns [`CycleError::Terminal`] carrying `cause`, without
/// consulting the strategy or notifying observers.
pub fn force_exit<E>(cause: E) -> AttemptError<E> {
    AttemptError::Terminal(cause)
}

/// # Terminal outcome of a retry cycle run.
///
/// Exactly one of these is returned when a run does not end in success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError<E> {
    /// The strategy ended the cycle (attempt limit, timeout, or [`once`]).
    /// Carries the error from the last attempt.
    ///
    /// [`once`]: crate::backoff::once
    #[error("retries exhausted: {0}")]
    Exhausted(E),

    /// An attempt forced an exit via [`force_exit`]; carries the unwrapped
    /// cause.
    #[error("terminal failure: {0}")]
    Terminal(E),

    /// The cancellation token was signaled, either during a wait or before
    /// the strategy exited.
    #[error("retry cycle canceled")]
    Canceled,
}

impl<E> CycleError<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use cycler::CycleError;
    ///
    /// let err: CycleError<&str> = CycleError::Canceled;
    /// assert_eq!(err.as_label(), "cycle_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CycleError::Exhausted(_) => "cycle_exhausted",
            CycleError::Terminal(_) => "cycle_terminal",
            CycleError::Canceled => "cycle_canceled",
        }
    }

    /// Returns `true` if the run ended because of cancellation.
    pub fn is_canceled(&self) -> bool {
        matches!(self, CycleError::Canceled)
    }

    /// Consumes the outcome and returns the attempt error it carries, if any.
    pub fn into_inner(self) -> Option<E> {
        match self {
            CycleError::Exhausted(e) | CycleError::Terminal(e) => Some(e),
            CycleError::Canceled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark_wraps_retryable() {
        fn inner() -> Result<(), AttemptError<String>> {
            Err("boom".to_string())?
        }
        assert_eq!(inner(), Err(AttemptError::Retryable("boom".to_string())));
    }

    #[test]
    fn test_force_exit_is_terminal() {
        let err = force_exit("fatal");
        assert_eq!(err, AttemptError::Terminal("fatal"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_into_inner_unwraps_cause() {
        assert_eq!(force_exit("cause").into_inner(), "cause");
        assert_eq!(AttemptError::Retryable("cause").into_inner(), "cause");
        assert_eq!(CycleError::Terminal("cause").into_inner(), Some("cause"));
        assert_eq!(CycleError::<&str>::Canceled.into_inner(), None);
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(AttemptError::Retryable(()).as_label(), "attempt_retryable");
        assert_eq!(AttemptError::Terminal(()).as_label(), "attempt_terminal");
        assert_eq!(CycleError::Exhausted(()).as_label(), "cycle_exhausted");
        assert_eq!(CycleError::Terminal(()).as_label(), "cycle_terminal");
        assert_eq!(CycleError::<()>::Canceled.as_label(), "cycle_canceled");
    }

    #[test]
    fn test_display_carries_cause() {
        let err: CycleError<&str> = CycleError::Exhausted("socket closed");
        assert_eq!(err.to_string(), "retries exhausted: socket closed");
    }
}
