//! Exchange sort: compare every pair, swap when out of order

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Double loop comparing position `i` with every later position and swapping
/// immediately when they are out of order. Unlike
/// [`SelectionSort`](super::SelectionSort) it may swap many times per pass.
///
/// One step per pairwise comparison, swapped or not: always
/// `n * (n - 1) / 2` for `n` bars.
pub struct ExchangeSort;

impl SortAlgorithm for ExchangeSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        for i in low..high {
            for j in (i + 1)..=high {
                if data[i].value > data[j].value {
                    data.swap(i, j);
                }
                probe.notify_pair(data, i, j);
            }
        }
    }
}
