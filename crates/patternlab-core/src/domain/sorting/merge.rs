use super::{SortStats, SortStrategy};
use crate::domain::value_objects::SortAlgorithm;

/// Top-down merge sort.
///
/// Splits the slice in half, sorts copies of both halves recursively, then
/// merges them back. Ties are taken from the left half, which keeps the sort
/// stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl<T: PartialOrd + Clone> SortStrategy<T> for MergeSort {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Merge
    }

    fn sort_with_stats(&self, items: &mut [T], stats: &mut SortStats) {
        merge_sort(items, stats);
    }
}

fn merge_sort<T: PartialOrd + Clone>(items: &mut [T], stats: &mut SortStats) {
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();

    merge_sort(&mut left, stats);
    merge_sort(&mut right, stats);

    stats.passes += 1;
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_right = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => {
                stats.comparisons += 1;
                r < l
            }
            (None, _) => true,
            (_, None) => false,
        };

        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }
}
