use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Step counter for a single run.
///
/// Cloning yields another handle to the same count. Reads never observe a
/// torn value and increments are never lost.
#[derive(Debug, Clone, Default)]
pub struct StepCounter {
    count: Arc<AtomicU64>,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    /// Add one step, returning the new total
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
