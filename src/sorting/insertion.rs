//! Insertion sort: shift each bar left until it fits

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Each bar moves left one position at a time.
///
/// One step per comparison with the left neighbour; a shift is performed by
/// the comparison that found the pair out of order and rides on that step.
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        for i in (low + 1)..=high {
            let mut j = i;
            while j > low {
                let out_of_order = data[j - 1].value > data[j].value;
                if out_of_order {
                    data.swap(j - 1, j);
                }
                probe.notify_pair(data, j - 1, j);
                if !out_of_order {
                    break;
                }
                j -= 1;
            }
        }
    }
}
