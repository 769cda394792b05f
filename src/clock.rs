/// Provides the current time.  Injected into the session so that tests can control time.
pub trait Clock {
    fn now(&self) -> time::OffsetDateTime;
}

/// Wall-clock time in UTC, truncated to milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> time::OffsetDateTime {
        crate::now_utc_milliseconds()
    }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub time::OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> time::OffsetDateTime {
        self.0
    }
}
