//! The instrumented sorting catalog
//!
//! This module provides:
//! - [`SortAlgorithm`]: the one capability every variant implements
//! - [`Algorithm`]: the fixed, ordered catalog of ten variants
//! - [`run_sort`]: lookup by catalog index followed by delegation
//! - [`errors`]: dispatch error types
//!
//! # Ranges
//!
//! Every algorithm sorts the inclusive range `[low, high]` in place and leaves
//! the rest of the slice alone. `low > high` is an empty range and a no-op.
//! `high` past the end of the slice is a caller bug and panics on entry; the
//! algorithms themselves never re-check bounds per step.
//!
//! # Steps
//!
//! What counts as one step is fixed per algorithm and documented on each
//! type. Every step goes through the [`Probe`] exactly once.

mod bubble;
mod cocktail;
pub mod errors;
mod exchange;
mod heap;
mod insertion;
mod merge;
mod pancake;
mod quick;
mod selection;
mod shell;

pub use bubble::BubbleSort;
pub use cocktail::CocktailSort;
pub use errors::SortError;
pub use exchange::ExchangeSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use pancake::PancakeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

use crate::dataset::Bar;
use crate::instrument::Probe;
use std::fmt;
use std::str::FromStr;

/// Sort a bounded range of bars, reporting every step.
pub trait SortAlgorithm: Sync {
    /// Sort `data[low..=high]` ascending by value.
    ///
    /// # Panics
    ///
    /// Panics if `low <= high` and `high >= data.len()`.
    fn sort(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        if low > high {
            return;
        }
        assert!(
            high < data.len(),
            "sort range [{}, {}] out of bounds for {} elements",
            low,
            high,
            data.len()
        );
        self.sort_range(data, low, high, probe);
    }

    /// Sort a validated, non-empty range. Called only through [`SortAlgorithm::sort`].
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe);
}

/// Catalog of algorithms, in selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Shell,
    Pancake,
    Cocktail,
    Heap,
    Exchange,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Shell,
        Algorithm::Pancake,
        Algorithm::Cocktail,
        Algorithm::Heap,
        Algorithm::Exchange,
    ];

    pub fn from_index(index: usize) -> Result<Self, SortError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SortError::InvalidSelection { index })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
            Algorithm::Shell => "Shell",
            Algorithm::Pancake => "Pancake",
            Algorithm::Cocktail => "Cocktail",
            Algorithm::Heap => "Heap",
            Algorithm::Exchange => "Exchange",
        }
    }

    /// The implementation behind this catalog entry
    pub fn implementation(self) -> &'static dyn SortAlgorithm {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::Selection => &SelectionSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Merge => &MergeSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Shell => &ShellSort,
            Algorithm::Pancake => &PancakeSort,
            Algorithm::Cocktail => &CocktailSort,
            Algorithm::Heap => &HeapSort,
            Algorithm::Exchange => &ExchangeSort,
        }
    }

    /// Next entry in catalog order (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous entry in catalog order (wraps)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn sort(self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        log::trace!("{} sort over [{}, {}]", self.name(), low, high);
        self.implementation().sort(data, low, high, probe);
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let wanted = wanted
            .strip_suffix(" sort")
            .or_else(|| wanted.strip_suffix(" Sort"))
            .unwrap_or(wanted);
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Resolve `selection` in the catalog and sort `data[low..=high]` with it.
///
/// An invalid selection is reported before anything runs: the data and the
/// probe's counter are left untouched.
pub fn run_sort(
    selection: usize,
    data: &mut [Bar],
    low: usize,
    high: usize,
    probe: &mut Probe,
) -> Result<Algorithm, SortError> {
    let algorithm = Algorithm::from_index(selection)?;
    log::debug!("dispatching selection {} to {}", selection, algorithm);
    algorithm.sort(data, low, high, probe);
    Ok(algorithm)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dataset::{paint, Bar};
    use crate::instrument::{Probe, StepCounter};

    use super::SortAlgorithm;

    /// Sort the whole slice, returning the sorted values and the step count
    pub fn sort_all(algorithm: &dyn SortAlgorithm, values: &[u32]) -> (Vec<u32>, u64) {
        let mut data: Vec<Bar> = paint(values);
        let mut probe = Probe::new(StepCounter::new());
        if !data.is_empty() {
            let high = data.len() - 1;
            algorithm.sort(&mut data, 0, high, &mut probe);
        }
        (data.iter().map(|b| b.value).collect(), probe.steps())
    }
}
