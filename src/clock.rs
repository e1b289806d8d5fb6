//! Authoritative wall-clock time.
//!
//! The controller only needs to read the time, overwrite it when the user
//! commits an edit, and nudge it forward by a fraction of a second on every
//! tick. [`SystemClock`] captures that, and [`SoftClock`] implements it purely
//! in software for boards without a running RTC.

use chrono::{NaiveDateTime, TimeDelta};

/// Source of the current date and time.
pub trait SystemClock {
    /// Current date and time.
    fn now(&self) -> NaiveDateTime;

    /// Replaces the current date and time.
    fn set(&mut self, datetime: NaiveDateTime);

    /// Moves the clock forward by `micros` microseconds.
    fn adjust(&mut self, micros: u32);
}

/// A clock that only moves when it is adjusted.
///
/// Sub-second adjustments accumulate, so repeated ticks of a fraction of a
/// second add up to whole seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SoftClock {
    now: NaiveDateTime,
}

impl SoftClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: start }
    }
}

impl SystemClock for SoftClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn set(&mut self, datetime: NaiveDateTime) {
        self.now = datetime;
    }

    fn adjust(&mut self, micros: u32) {
        match self
            .now
            .checked_add_signed(TimeDelta::microseconds(i64::from(micros)))
        {
            Some(next) => self.now = next,
            None => error!("clock adjustment overflowed, holding time"),
        }
    }
}
