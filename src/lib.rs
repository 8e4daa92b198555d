//! # Introduction
//!
//! SorTTY runs classic comparison sorts over a ten-bar dataset, counting every
//! step and streaming each comparison and placement to a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Preset → Dataset → Orchestrator → worker: Algorithm + Probe → StepEvents → TUI
//!                                                      ↘ StepCounter ↗
//! ```
//!
//! 1. **[`dataset`]**: [`dataset::Bar`] (value + color) and the preset shapes.
//! 2. **[`instrument`]**: the atomic [`instrument::StepCounter`], the
//!    [`instrument::Probe`] algorithms report through, and the
//!    [`instrument::StepEvent`] stream.
//! 3. **[`sorting`]**: the [`sorting::SortAlgorithm`] trait, its ten
//!    implementations and the [`sorting::Algorithm`] catalog.
//! 4. **[`runner`]**: one worker thread per run, at most one run at a time, and
//!    the [`runner::RunReport`] metrics.
//! 5. **[`config`]**: command-line options.
//! 6. **[`ui`]**: ratatui-based TUI; not part of the stable library API.
//!
//! ## Catalog
//!
//! Bubble, Selection, Insertion, Merge, Quick, Shell, Pancake, Cocktail, Heap,
//! Exchange (selection indices 0 through 9).

pub mod config;
pub mod dataset;
pub mod instrument;
pub mod runner;
pub mod sorting;
pub mod ui;
