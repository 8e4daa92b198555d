//! Dispatch errors
//!
//! Algorithms themselves have no failure modes: sorting is total over a valid
//! range. The only errors are failing to resolve which algorithm to run.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Catalog index outside `0..=9`
    #[error("Invalid selection {index}: the catalog has entries 0 through 9")]
    InvalidSelection { index: usize },

    /// Name that matches no catalog entry
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}
