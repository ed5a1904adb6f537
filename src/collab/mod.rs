//! # Injected collaborators: time and randomness.
//!
//! Both are single-function contracts with function-backed adapters
//! ([`ClockFn`], [`RandomFn`]) for tests, and default implementations
//! ([`SystemClock`], [`ThreadRandom`]) instantiated at the composition root.

mod clock;
mod random;

pub use clock::{Clock, ClockFn, SystemClock};
pub use random::{RandomFn, RandomSource, ThreadRandom};
