//! Pancake sort: move each maximum into place with prefix flips

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Repeatedly find the maximum of the unsorted prefix, flip it to the front,
/// then flip the whole prefix so it lands at the end.
///
/// One step per comparison in the maximum scan and one per bar moved by a
/// flip (a flip of `k` bars moves `k` bars, or `k - 1` when `k` is odd).
pub struct PancakeSort;

impl SortAlgorithm for PancakeSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        let mut end = high;
        while end > low {
            let mut max = low;
            for i in (low + 1)..=end {
                probe.notify_pair(data, max, i);
                if data[i].value > data[max].value {
                    max = i;
                }
            }
            if max != end {
                if max != low {
                    flip(data, low, max, probe);
                }
                flip(data, low, end, probe);
            }
            end -= 1;
        }
    }
}

/// Reverse `data[low..=high]`
fn flip(data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
    let (mut i, mut j) = (low, high);
    while i < j {
        data.swap(i, j);
        probe.notify(data, i);
        probe.notify(data, j);
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::sort_all;

    #[test]
    fn test_pancake_sorted_input_only_scans() {
        let (values, steps) = sort_all(&PancakeSort, &[1, 2, 3]);
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_pancake_counts_moved_bars() {
        let (values, steps) = sort_all(&PancakeSort, &[1, 3, 2]);
        assert_eq!(values, vec![1, 2, 3]);
        // 3 scan comparisons, 3 flips moving 2 bars each
        assert_eq!(steps, 9);
    }
}
