//! Cocktail shaker sort: bubble passes in alternating directions

use super::SortAlgorithm;
use crate::dataset::Bar;
use crate::instrument::Probe;

/// Forward pass carries the maximum right, backward pass carries the minimum
/// left; stops once a pass makes no swap.
///
/// One step per adjacent comparison.
pub struct CocktailSort;

impl SortAlgorithm for CocktailSort {
    fn sort_range(&self, data: &mut [Bar], low: usize, high: usize, probe: &mut Probe) {
        let (mut start, mut end) = (low, high);

        while start < end {
            let mut swapped = false;
            for i in start..end {
                swapped |= compare_swap(data, i, probe);
            }
            if !swapped {
                break;
            }
            end -= 1;

            swapped = false;
            for i in (start..end).rev() {
                swapped |= compare_swap(data, i, probe);
            }
            if !swapped {
                break;
            }
            start += 1;
        }
    }
}

/// Order the pair `(i, i + 1)`; true if it swapped
fn compare_swap(data: &mut [Bar], i: usize, probe: &mut Probe) -> bool {
    let out_of_order = data[i].value > data[i + 1].value;
    if out_of_order {
        data.swap(i, i + 1);
    }
    probe.notify_pair(data, i, i + 1);
    out_of_order
}
