//! Sorting strategies (the Strategy pattern).
//!
//! A [`SortStrategy`] is an interchangeable algorithm behind one call
//! contract: sort a slice in place, comparing elements with `<` only.
//! [`SortingContext`] holds the active strategy and lets callers swap it at
//! runtime.
//!
//! | Strategy      | Stable | Best       | Worst      |
//! |---------------|--------|------------|------------|
//! | [`BubbleSort`]| yes    | O(n)       | O(n²)      |
//! | [`MergeSort`] | yes    | O(n log n) | O(n log n) |
//! | [`QuickSort`] | no     | O(n log n) | O(n²)      |

mod bubble;
mod context;
mod merge;
mod quick;

pub use bubble::BubbleSort;
pub use context::SortingContext;
pub use merge::MergeSort;
pub use quick::{QuickSort, partition};

use serde::Serialize;

use crate::domain::value_objects::SortAlgorithm;

/// Counters gathered while a strategy runs.
///
/// `passes` means full sweeps for bubble sort, merge steps for merge sort and
/// partition calls for quick sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub passes: u64,
}

/// An interchangeable in-place sorting algorithm.
pub trait SortStrategy<T>: Send + Sync {
    /// Which catalogue entry this strategy implements.
    fn algorithm(&self) -> SortAlgorithm;

    /// Sort `items` in place, recording work done into `stats`.
    fn sort_with_stats(&self, items: &mut [T], stats: &mut SortStats);

    /// Sort `items` in place.
    fn sort(&self, items: &mut [T]) {
        let mut stats = SortStats::default();
        self.sort_with_stats(items, &mut stats);
    }
}

/// Resolve a catalogue key to its strategy.
pub fn strategy_for<T>(algorithm: SortAlgorithm) -> Box<dyn SortStrategy<T>>
where
    T: PartialOrd + Clone + 'static,
{
    match algorithm {
        SortAlgorithm::Bubble => Box::new(BubbleSort),
        SortAlgorithm::Merge => Box::new(MergeSort),
        SortAlgorithm::Quick => Box::new(QuickSort),
    }
}
