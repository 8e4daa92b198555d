//! Quicksort with Lomuto partitioning around the last element

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Partition around the last bar of the range, recurse into the smaller side
/// and loop on the larger one, so recursion depth stays logarithmic even on
/// ordered input.
///
/// One step per comparison against the pivot (a swap it triggers rides on
/// that step), plus one step when the pivot is moved into its final slot.
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        quick_sort(data, low, high, probe);
    }
}

fn quick_sort(data: &mut [Bar], mut low: usize, mut high: usize, probe: &mut Probe) {
    while low < high {
        let pivot = partition(data, low, high, probe);
        if pivot - low < high - pivot {
            if pivot > low {
                quick_sort(data, low, pivot - 1, probe);
            }
            low = pivot + 1;
        } else {
            // pivot > low here, since low < high
            if pivot < high {
                quick_sort(data, pivot + 1, high, probe);
            }
            high = pivot - 1;
        }
    }
}

/// Returns the pivot's final index
fn partition(data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) -> usize {
    let pivot = data[high].value;
    let mut store = low;

    for j in low..high {
        if data[j].value < pivot {
            data.swap(store, j);
            probe.notify_pair(data, store, j);
            store += 1;
        } else {
            probe.notify_pair(data, j, high);
        }
    }

    if store != high {
        data.swap(store, high);
        probe.notify_pair(data, store, high);
    }
    store
}
