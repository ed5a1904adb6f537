//! # Retry cycle execution.
//!
//! [`Cycler`] owns a composed strategy, the observer list, and a clock, and
//! drives the attempt/wait loop. See the [`Cycler`] docs for the full state
//! machine.

mod cycler;

pub use cycler::Cycler;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::log_errors;
