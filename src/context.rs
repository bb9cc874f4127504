use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock;

// @module: Per-run state shared by the pipeline stages

/// State owned by a single resync run.
///
/// Created once per invocation and handed by reference to every stage, so
/// repeated runs in one process never see each other's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    // @field: Day-zero instant all timestamps are projected onto
    reference: NaiveDateTime,
}

impl RunContext {
    /// Context anchored on the fixed reference day
    pub fn new() -> Self {
        Self::on(clock::reference_date())
    }

    /// Context anchored on an arbitrary calendar day
    pub fn on(date: NaiveDate) -> Self {
        RunContext {
            reference: date.and_time(NaiveTime::MIN),
        }
    }

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Lower clamp bound for shifted timestamps
    pub fn day_zero(&self) -> NaiveDateTime {
        clock::day_zero(self.reference)
    }

    /// Project a time of day onto this run's reference day
    pub fn at(&self, hour: u32, minute: u32, second: u32, millisecond: u32) -> NaiveDateTime {
        clock::set_clock(self.reference, hour, minute, second, millisecond)
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
