//! Bubble sort: repeated adjacent compare-and-swap passes

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Classic bubble sort without the early-exit check.
///
/// One step per adjacent comparison, so a range of `n` bars always takes
/// `n * (n - 1) / 2` steps.
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        for pass in 0..(high - low) {
            for j in low..(high - pass) {
                if data[j].value > data[j + 1].value {
                    data.swap(j, j + 1);
                }
                probe.notify_pair(data, j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::sort_all;

    #[test]
    fn test_bubble_counts_every_comparison() {
        let (values, steps) = sort_all(&BubbleSort, &[5, 3, 4, 1, 2]);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(steps, 10);
    }

    #[test]
    fn test_bubble_sorted_input_still_compares() {
        let (values, steps) = sort_all(&BubbleSort, &[1, 2, 3, 4]);
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(steps, 6);
    }
}
