//! Injectable calendar source
//!
//! Age and birthday computation depend on "today". The engine never reads the
//! system clock directly; callers hand it a [`ParkClock`] so evaluation stays
//! deterministic under test.

use chrono::{Local, NaiveDate};

/// Source of the current calendar day
pub trait ParkClock {
    /// The current date as seen by this clock
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ParkClock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests and replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    /// The date this clock always reports
    pub today: NaiveDate,
}

impl FixedClock {
    /// Create a clock pinned to the given date
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl ParkClock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
