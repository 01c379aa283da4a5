//! Sort Service - a traced front for [`SortingContext`].

use tracing::{debug, info, instrument};

use crate::{
    domain::{SortAlgorithm, SortStats, SortStrategy, SortingContext},
    error::LabResult,
};

/// Sorts sequences with a swappable strategy and logs each run.
pub struct SortService<T> {
    context: SortingContext<T>,
}

impl<T> SortService<T>
where
    T: PartialOrd + Clone + 'static,
{
    pub fn new(context: SortingContext<T>) -> Self {
        Self { context }
    }

    pub fn with_algorithm(algorithm: SortAlgorithm) -> Self {
        Self::new(SortingContext::with_algorithm(algorithm))
    }

    /// Swap the strategy used by later sorts.
    pub fn set_algorithm(&mut self, strategy: Box<dyn SortStrategy<T>>) {
        debug!(
            from = ?self.context.algorithm(),
            to = %strategy.algorithm(),
            "Switching sort strategy"
        );
        self.context.set_algorithm(strategy);
    }

    pub fn algorithm(&self) -> Option<SortAlgorithm> {
        self.context.algorithm()
    }

    #[instrument(skip_all, fields(len = items.len(), algorithm = ?self.context.algorithm()))]
    pub fn sort(&self, items: &mut [T]) -> LabResult<()> {
        self.context.sort(items)?;
        debug!("Sorted");
        Ok(())
    }

    #[instrument(skip_all, fields(len = items.len(), algorithm = ?self.context.algorithm()))]
    pub fn sort_instrumented(&self, items: &mut [T]) -> LabResult<SortStats> {
        let stats = self.context.sort_instrumented(items)?;
        info!(
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            passes = stats.passes,
            "Sorted"
        );
        Ok(stats)
    }
}

impl<T> Default for SortService<T> {
    fn default() -> Self {
        Self {
            context: SortingContext::default(),
        }
    }
}
