//! Cycle-range dispatch.
//!
//! A host clock delivers work in `[begin, end)` slices of a bounded cycle
//! domain, and slice boundaries land wherever the host happens to stop. The
//! dispatchers here turn one such slice into the calls a component needs:
//!
//! - [`RangeDispatcher`] calls [`Sequencer::perform`] once per cycle.
//! - [`SubrangeDispatcher`] collapses runs of cycles that a [`Classifier`]
//!   puts in the same region into at most three calls per run.
//!
//! Consecutive, non-overlapping slices always add up to exactly the calls a
//! single slice over the union would have produced.
//!
//! # Preconditions
//!
//! Every dispatch requires `begin <= end <= MAX`. Violations are programming
//! errors: they trip a `debug_assert!` and are unchecked in release builds.
//! `MAX` itself must be below [`MAX_CYCLES`], which is checked at compile time.

mod range;
mod subrange;

pub use range::{RangeDispatcher, Sequencer};
pub use subrange::{Classifier, Run, SubrangeDispatcher, SubrangeTarget};

/// Exclusive upper bound on the `MAX` of any sequencer or classifier.
pub const MAX_CYCLES: usize = 2048;
