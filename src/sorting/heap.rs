//! Heap sort over an offset max-heap

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Build a max-heap over the range, then repeatedly swap the root behind the
/// heap and sift the new root down.
///
/// One step per comparison made while sifting, plus one step for each
/// root extraction swap.
pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        let len = high - low + 1;

        for root in (0..len / 2).rev() {
            sift_down(data, low, root, len, probe);
        }

        for end in (1..len).rev() {
            data.swap(low, low + end);
            probe.notify_pair(data, low, low + end);
            sift_down(data, low, 0, end, probe);
        }
    }
}

/// Restore the heap property below `root` for the heap `data[base..base + len]`
fn sift_down(data: &mut [Bar], base: usize, mut root: usize, len: usize, probe: &mut Probe) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            break;
        }

        let mut child = left;
        if left + 1 < len {
            probe.notify_pair(data, base + left, base + left + 1);
            if data[base + left + 1].value > data[base + left].value {
                child = left + 1;
            }
        }

        let larger = data[base + child].value > data[base + root].value;
        if larger {
            data.swap(base + root, base + child);
        }
        probe.notify_pair(data, base + root, base + child);
        if !larger {
            break;
        }
        root = child;
    }
}
