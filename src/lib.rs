//! A platform-agnostic alarm clock controller for `no_std` targets.
//!
//! The controller drives a 16x2 character display from three momentary
//! switches (Adjust, Select, Page), keeps the wall-clock time through a
//! [`SystemClock`], and compares it against a user-set alarm.
//!
//! # Features
//!
//! - Four views: current time, clock time editor, clock date editor, alarm editor
//! - Field-by-field editing driven by a fixed column/range table
//! - Hour stored in 24-hour form, displayed on a 12-hour dial with AM/PM
//! - Software clock that advances by a fixed fraction of a second per tick
//! - Optional async tick using `embedded-hal-async`
//! - Optional logging through `log` or `defmt`
//!
//! # Control loop
//!
//! Each call to [`AlarmClock::step`] performs, in order:
//!
//! 1. poll the switches (priority Adjust, Select, Page)
//! 2. update the view, selection or edited value
//! 3. redraw the current view
//! 4. tick: pause for the tick period, then advance the clock
//!
//! ```rust,ignore
//! use alarm_clock::{AlarmClock, Config, SoftClock};
//!
//! let clock = SoftClock::new(start);
//! let mut alarm_clock = AlarmClock::new(lcd, clock, adjust, select, page, Config::default())?;
//! loop {
//!     alarm_clock.step(&mut delay)?;
//!     if alarm_clock.is_alarm_time() {
//!         buzzer.set_high()?;
//!     }
//! }
//! ```
//!
//! # Feature flags
//!
//! - `async`: [`AlarmClock::step_async`] and [`AlarmClock::tick_async`]
//! - `log` / `defmt`: internal logging backend (mutually exclusive)
//! - `temperature_f32`: floating point temperature helpers

#![no_std]

#[macro_use]
mod fmt;

pub mod clock;
pub mod controller;
pub mod display;
pub mod input;
pub mod temperature;
pub mod time;
pub mod view;

#[cfg(feature = "async")]
pub mod asynch;

pub use clock::{SoftClock, SystemClock};
pub use controller::AlarmClock;
pub use display::{CharDisplay, LCD_COLS, LCD_ROWS};
pub use input::{ActiveLevel, Switch, Switches};
pub use temperature::fahrenheit;
pub use time::{is_alarm_time, EditableField, Field, FieldRange, Meridiem, TimeError, TimeInfo};
pub use view::{is_editable, next_field, next_view, ViewMode};

/// Date and time the clock starts from: Sunday, February 22 2015, 6:36:00 PM.
pub const SEED_TIME: TimeInfo = TimeInfo::new(2015, 2, 22, 1, 18, 36, 0);

/// Pause inside each tick, in milliseconds.
pub const TICK_PERIOD_MS: u32 = 125;

/// Clock advance per tick, in microseconds.
pub const TICK_ADJUSTMENT_US: u32 = 125_000;

/// Startup configuration for [`AlarmClock`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Initial clock time; the alarm and the edit copy start from it too
    pub seed: TimeInfo,
    /// Pause inside each tick
    pub tick_period_ms: u32,
    /// How far each tick moves the clock
    pub tick_adjustment_us: u32,
    /// Level at which a switch reads as pressed
    pub switch_level: ActiveLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SEED_TIME,
            tick_period_ms: TICK_PERIOD_MS,
            tick_adjustment_us: TICK_ADJUSTMENT_US,
            switch_level: ActiveLevel::High,
        }
    }
}

/// Errors from the controller and the hardware around it.
#[derive(Debug, PartialEq)]
pub enum AlarmClockError<DE, PE> {
    /// Writing to the display failed
    Display(DE),
    /// Reading a switch failed
    Input(PE),
    /// A time could not be written to the clock
    Clock(TimeError),
}

impl<DE, PE> From<TimeError> for AlarmClockError<DE, PE> {
    fn from(e: TimeError) -> Self {
        AlarmClockError::Clock(e)
    }
}
