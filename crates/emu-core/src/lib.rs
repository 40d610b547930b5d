//! Core traits and types for cycle-accurate emulation.
//!
//! Components are driven by a host clock that hands over work in slices of
//! arbitrary length. The [`dispatch`] module turns those slices into the
//! per-cycle or per-region calls a component actually wants.

pub mod dispatch;

mod cycles;
mod observable;

pub use cycles::HalfCycles;
pub use dispatch::{Classifier, RangeDispatcher, Run, Sequencer, SubrangeDispatcher, SubrangeTarget};
pub use observable::{Observable, Value};
