//! Reference-date source ("today").
//!
//! Expiry classification is a pure function of a record and a calendar date.
//! Callers obtain that date from a [`Clock`] so tests can pin it.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date in the local reference frame, truncated to the day.
    fn today(&self) -> NaiveDate;
}

impl<C> Clock for std::sync::Arc<C>
where
    C: Clock + ?Sized,
{
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall-clock date in the local time zone.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pinned date, for tests and reproducible runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let clock = FixedClock::new(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn shared_clock_delegates() {
        let day = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(day));
        assert_eq!(clock.today(), day);
    }
}
