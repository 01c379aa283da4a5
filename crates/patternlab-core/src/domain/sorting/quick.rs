use super::{SortStats, SortStrategy};
use crate::domain::value_objects::SortAlgorithm;

/// Quick sort with Lomuto partitioning and the last element as pivot.
///
/// Not stable. Already-sorted input is the worst case for time (O(n²)).
/// Only the smaller side of each partition is recursed into, so stack depth
/// stays O(log n) whatever the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl<T: PartialOrd> SortStrategy<T> for QuickSort {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Quick
    }

    fn sort_with_stats(&self, items: &mut [T], stats: &mut SortStats) {
        quick_sort(items, stats);
    }
}

fn quick_sort<T: PartialOrd>(mut items: &mut [T], stats: &mut SortStats) {
    while items.len() > 1 {
        let pivot = partition_counted(items, stats);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, stats);
            items = right;
        } else {
            quick_sort(right, stats);
            items = left;
        }
    }
}

/// Lomuto partition of the whole slice around its last element.
///
/// Returns the pivot's final index `p`. Afterwards every element before `p`
/// is strictly less than the pivot and every element from `p` on is not.
///
/// # Panics
/// Panics if `items` is empty.
pub fn partition<T: PartialOrd>(items: &mut [T]) -> usize {
    partition_counted(items, &mut SortStats::default())
}

fn partition_counted<T: PartialOrd>(items: &mut [T], stats: &mut SortStats) -> usize {
    assert!(!items.is_empty(), "cannot partition an empty slice");

    stats.passes += 1;
    let high = items.len() - 1;
    let mut store = 0;

    // `store <= j < high`, so the pivot stays put until the final swap.
    for j in 0..high {
        stats.comparisons += 1;
        if items[j] < items[high] {
            items.swap(store, j);
            stats.swaps += 1;
            store += 1;
        }
    }

    items.swap(store, high);
    stats.swaps += 1;
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_array() {
        let mut items = [8, 3, 7, 4, 2];
        QuickSort.sort(&mut items);
        assert_eq!(items, [2, 3, 4, 7, 8]);
    }

    #[test]
    fn sorts_with_duplicates_and_negatives() {
        let mut items = [0, -4, 7, 7, -4, 3, 0, 1];
        QuickSort.sort(&mut items);
        assert_eq!(items, [-4, -4, 0, 0, 1, 3, 7, 7]);
    }

    #[test]
    fn partition_places_pivot_between_halves() {
        let mut items = [9, 1, 8, 2, 7, 3, 5];
        let pivot_value = items[items.len() - 1];
        let p = partition(&mut items);

        assert_eq!(items[p], pivot_value);
        assert!(items[..p].iter().all(|&x| x < pivot_value));
        assert!(items[p..].iter().all(|&x| x >= pivot_value));
    }

    #[test]
    fn partition_with_pivot_equal_elements_keeps_them_right() {
        let mut items = [4, 2, 4, 1, 4];
        let p = partition(&mut items);
        assert_eq!(p, 2);
        assert!(items[..p].iter().all(|&x| x < 4));
        assert!(items[p..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn partition_of_single_element_is_zero() {
        let mut items = [42];
        assert_eq!(partition(&mut items), 0);
    }

    #[test]
    #[should_panic]
    fn partition_rejects_empty_slice() {
        let mut items: [i32; 0] = [];
        partition(&mut items);
    }

    #[test]
    fn sorted_input_partitions_once_per_element() {
        let mut items: Vec<u32> = (0..16).collect();
        let mut stats = SortStats::default();
        QuickSort.sort_with_stats(&mut items, &mut stats);
        // Last-element pivot peels one element per call on sorted input.
        assert_eq!(stats.passes, 15);
    }

    #[test]
    fn large_sorted_input_does_not_exhaust_the_stack() {
        // One stack frame per element would not fit in 256 KiB. The input
        // stays modest because sorted input is quadratic.
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut ascending: Vec<i64> = (0..20_000).collect();
                QuickSort.sort(&mut ascending);
                assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

                let mut descending: Vec<i64> = (0..20_000).rev().collect();
                QuickSort.sort(&mut descending);
                assert_eq!(descending, (0..20_000).collect::<Vec<_>>());
            })
            .unwrap();
        handle.join().unwrap();
    }
}
