//! Top-down merge sort with a buffer sized to each merged subrange

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Split at the midpoint, sort both halves, merge through a buffer.
///
/// One step per bar written into the buffer and one per bar copied back, so
/// merging `k` bars costs `2k` steps.
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        merge_sort(data, low, high, probe);
    }
}

fn merge_sort(data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    merge_sort(data, low, mid, probe);
    merge_sort(data, mid + 1, high, probe);
    merge(data, low, mid, high, probe);
}

/// Merge the sorted runs `[low, mid]` and `[mid + 1, high]`
fn merge(data: &mut [Bar], low: usize, mid: usize, high: usize, probe: &mut Probe) {
    let mut buffer = Vec::with_capacity(high - low + 1);
    let (mut left, mut right) = (low, mid + 1);

    while left <= mid && right <= high {
        let take = if data[right].value < data[left].value {
            right += 1;
            right - 1
        } else {
            left += 1;
            left - 1
        };
        buffer.push(data[take]);
        probe.notify(data, take);
    }
    for take in (left..=mid).chain(right..=high) {
        buffer.push(data[take]);
        probe.notify(data, take);
    }

    for (offset, bar) in buffer.into_iter().enumerate() {
        data[low + offset] = bar;
        probe.notify(data, low + offset);
    }
}
