//! Shell sort with the halving gap sequence

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Gapped insertion sort; the gap starts at half the range length and halves
/// down to 1.
///
/// One step per gapped comparison, with the shift riding on it as in
/// [`InsertionSort`](super::InsertionSort).
pub struct ShellSort;

impl SortAlgorithm for ShellSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        let mut gap = (high - low + 1) / 2;
        while gap > 0 {
            for i in (low + gap)..=high {
                let mut j = i;
                while j >= low + gap {
                    let out_of_order = data[j - gap].value > data[j].value;
                    if out_of_order {
                        data.swap(j - gap, j);
                    }
                    probe.notify_pair(data, j - gap, j);
                    if !out_of_order {
                        break;
                    }
                    j -= gap;
                }
            }
            gap /= 2;
        }
    }
}
