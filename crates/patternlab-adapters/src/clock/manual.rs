//! Hand-driven clock for demos and tests.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use patternlab_core::{
    application::{ApplicationError, ports::Clock},
    error::LabResult,
};

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a caller can keep a handle and advance
/// time while a service owns another clone.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<RwLock<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock frozen at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(at)),
        }
    }

    /// Move the clock to `at`. Moving backwards is allowed.
    pub fn set(&self, at: DateTime<Utc>) -> LabResult<()> {
        let mut now = self.inner.write().map_err(|_| lock_error())?;
        *now = at;
        Ok(())
    }

    /// Move the clock forward by `by` (backward if negative).
    pub fn advance(&self, by: Duration) -> LabResult<()> {
        let mut now = self.inner.write().map_err(|_| lock_error())?;
        *now += by;
        Ok(())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        // A poisoned lock still holds a valid instant.
        match self.inner.read() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

fn lock_error() -> ApplicationError {
    ApplicationError::StateLockError {
        name: "manual clock",
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn clones_share_time() {
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance(Duration::minutes(95)).unwrap();
        assert_eq!(clock.now(), start + Duration::minutes(95));

        handle.set(start).unwrap();
        assert_eq!(clock.now(), start);
    }
}
