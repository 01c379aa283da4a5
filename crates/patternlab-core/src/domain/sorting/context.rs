use std::fmt;

use super::{SortStats, SortStrategy, strategy_for};
use crate::domain::{error::DomainError, value_objects::SortAlgorithm};

/// Holds the active sorting strategy and delegates to it.
///
/// Built with a strategy via [`SortingContext::new`]. An empty context
/// (`Default`, or after [`SortingContext::take_algorithm`]) refuses to sort
/// with [`DomainError::NoSortingStrategy`].
pub struct SortingContext<T> {
    strategy: Option<Box<dyn SortStrategy<T>>>,
}

impl<T> SortingContext<T> {
    pub fn new(strategy: Box<dyn SortStrategy<T>>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Build a context from a catalogue key.
    pub fn with_algorithm(algorithm: SortAlgorithm) -> Self
    where
        T: PartialOrd + Clone + 'static,
    {
        Self::new(strategy_for(algorithm))
    }

    /// Replace the active strategy.
    pub fn set_algorithm(&mut self, strategy: Box<dyn SortStrategy<T>>) {
        self.strategy = Some(strategy);
    }

    /// Remove and return the active strategy, leaving the context empty.
    pub fn take_algorithm(&mut self) -> Option<Box<dyn SortStrategy<T>>> {
        self.strategy.take()
    }

    /// The catalogue key of the active strategy, if any.
    pub fn algorithm(&self) -> Option<SortAlgorithm> {
        self.strategy.as_ref().map(|s| s.algorithm())
    }

    /// Sort `items` in place with the active strategy.
    pub fn sort(&self, items: &mut [T]) -> Result<(), DomainError> {
        self.active()?.sort(items);
        Ok(())
    }

    /// Like [`SortingContext::sort`] but returns the strategy's counters.
    pub fn sort_instrumented(&self, items: &mut [T]) -> Result<SortStats, DomainError> {
        let mut stats = SortStats::default();
        self.active()?.sort_with_stats(items, &mut stats);
        Ok(stats)
    }

    fn active(&self) -> Result<&dyn SortStrategy<T>, DomainError> {
        self.strategy
            .as_deref()
            .ok_or(DomainError::NoSortingStrategy)
    }
}

impl<T> Default for SortingContext<T> {
    fn default() -> Self {
        Self { strategy: None }
    }
}

impl<T> fmt::Debug for SortingContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortingContext")
            .field("algorithm", &self.algorithm())
            .finish()
    }
}
