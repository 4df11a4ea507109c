use chrono::{Local, NaiveDate, NaiveDateTime};

/// Clock abstracts access to the current timestamp so reducers remain
/// deterministic in tests. Every derived, time-varying value in this crate
/// (days left, due buckets, streaks) takes `now` as an explicit parameter;
/// this trait is how callers obtain one.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the operator's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
