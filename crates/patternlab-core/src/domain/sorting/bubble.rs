use super::{SortStats, SortStrategy};
use crate::domain::value_objects::SortAlgorithm;

/// Bubble sort with early exit.
///
/// Each pass bubbles the largest remaining element up to the current upper
/// bound, then the bound shrinks by one. A pass without swaps ends the sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl<T: PartialOrd> SortStrategy<T> for BubbleSort {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Bubble
    }

    fn sort_with_stats(&self, items: &mut [T], stats: &mut SortStats) {
        for upper in (1..items.len()).rev() {
            stats.passes += 1;
            let mut swapped = false;

            for i in 0..upper {
                stats.comparisons += 1;
                if items[i + 1] < items[i] {
                    items.swap(i, i + 1);
                    stats.swaps += 1;
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(items: &mut [i32]) -> SortStats {
        let mut stats = SortStats::default();
        BubbleSort.sort_with_stats(items, &mut stats);
        stats
    }

    #[test]
    fn sorts_small_array() {
        let mut items = [5, 2, 9, 1, 5];
        run(&mut items);
        assert_eq!(items, [1, 2, 5, 5, 9]);
    }

    #[test]
    fn sorted_input_takes_one_pass_without_swaps() {
        let mut items = [1, 2, 3, 4, 5, 6];
        let stats = run(&mut items);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 5);
    }

    #[test]
    fn reversed_input_does_every_pass() {
        let mut items = [5, 4, 3, 2, 1];
        let stats = run(&mut items);
        assert_eq!(items, [1, 2, 3, 4, 5]);
        // n(n-1)/2 swaps; the final pass over two elements still swaps.
        assert_eq!(stats.swaps, 10);
        assert_eq!(stats.passes, 4);
    }

    #[test]
    fn is_stable() {
        let mut items = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        // Compare on the key only.
        let mut keyed: Vec<Keyed> = items.iter().map(|&(k, t)| Keyed(k, t)).collect();
        BubbleSort.sort(&mut keyed);
        for (slot, Keyed(k, t)) in items.iter_mut().zip(keyed) {
            *slot = (k, t);
        }
        assert_eq!(items, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[derive(Debug, Clone, Copy)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }
}
