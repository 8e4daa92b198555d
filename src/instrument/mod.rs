//! Step instrumentation shared by every sorting algorithm
//!
//! - [`StepCounter`]: atomic count of steps for one run, readable from any thread
//! - [`StepEvent`]: what a single step touched, in the order steps happened
//! - [`StepObserver`]: consumer of step events (renderer, recorder, channel)
//! - [`Probe`]: the handle algorithms call after every comparison or placement
//!
//! # Threading
//!
//! A run's worker thread owns the [`Probe`]; the counter is an `Arc` handle, so
//! the polling side keeps a clone and reads it while the worker increments.
//! Events leave the worker by value, so the polling side never touches the
//! worker's dataset.

mod counter;
mod probe;

pub use counter::StepCounter;
pub use probe::{Placement, Probe, StepEvent, StepObserver};
