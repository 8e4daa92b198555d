//! Selection sort: track the minimum, then place it with one swap

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Each pass scans the unsorted suffix for its minimum and swaps it into
/// place once.
///
/// One step per comparison against the running minimum, plus one step for
/// each swap that actually moves a bar.
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        for i in low..high {
            let mut min = i;
            for j in (i + 1)..=high {
                probe.notify_pair(data, min, j);
                if data[j].value < data[min].value {
                    min = j;
                }
            }
            if min != i {
                data.swap(i, min);
                probe.notify_pair(data, i, min);
            }
        }
    }
}
