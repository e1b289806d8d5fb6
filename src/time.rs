//! Field-based time representation for the alarm clock.
//!
//! The clock, the alarm threshold and the value being edited on screen are all
//! held as a [`TimeInfo`]: a broken-down record of second through year plus an
//! AM/PM tag. Editing works one field at a time through [`TimeInfo::increment`],
//! which is driven entirely by the [`EDITABLE_FIELDS`] table.
//!
//! # Hour / AM-PM invariant
//!
//! The hour is stored in 24-hour form (0-23) and the [`Meridiem`] tag always
//! agrees with it: `Pm` if and only if `hour >= 12`. Every assignment to either
//! side restores the invariant immediately:
//!
//! - setting the hour re-derives the tag,
//! - setting the tag moves the hour by 12.
//!
//! # Ranges
//!
//! Increments wrap with "below high: add one, otherwise low" semantics. Note that
//! the minute range is `[1, 60]`, so keyed-in minutes wrap 60 to 1 and never
//! reach 0; a minute of 60 cannot be committed to the clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// LCD column of the hour field.
pub const HOUR_COL: u8 = 0;
/// LCD column of the minute field.
pub const MINUTE_COL: u8 = 3;
/// LCD column of the AM/PM field.
pub const AMPM_COL: u8 = 6;
/// LCD column of the weekday field.
pub const WDAY_COL: u8 = 0;
/// LCD column of the month field.
pub const MONTH_COL: u8 = 4;
/// LCD column of the day-of-month field.
pub const DAY_COL: u8 = 8;
/// LCD column of the year field.
pub const YEAR_COL: u8 = 11;

/// AM/PM tag of a [`TimeInfo`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    /// Hours 0-11
    Am,
    /// Hours 12-23
    Pm,
}

impl Meridiem {
    /// The tag that agrees with a 24-hour `hour`.
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// The other tag.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }

    /// Printable form, `"AM"` or `"PM"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A field the user can select and adjust.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hour,
    Minute,
    AmPm,
    WeekDay,
    Month,
    Day,
    Year,
}

impl Field {
    /// The entry for this field in [`EDITABLE_FIELDS`].
    pub fn descriptor(self) -> Option<&'static EditableField> {
        EDITABLE_FIELDS.iter().find(|entry| entry.field == self)
    }

    /// LCD column where this field starts, 0 if the field has no table entry.
    pub fn column(self) -> u8 {
        self.descriptor().map_or(0, |entry| entry.column)
    }
}

/// Inclusive range a numeric field cycles through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldRange {
    pub low: u16,
    pub high: u16,
}

impl FieldRange {
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Next value after `value`: one more while below `high`, otherwise `low`.
    pub const fn increment(&self, value: u16) -> u16 {
        if value < self.high {
            value + 1
        } else {
            self.low
        }
    }
}

/// Display column and valid range of one editable field.
///
/// `range` is `None` for fields that toggle instead of counting (AM/PM).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditableField {
    pub field: Field,
    pub column: u8,
    pub range: Option<FieldRange>,
}

/// Columns and ranges of every editable field.
pub static EDITABLE_FIELDS: [EditableField; 7] = [
    EditableField {
        field: Field::Hour,
        column: HOUR_COL,
        range: Some(FieldRange::new(0, 23)),
    },
    EditableField {
        field: Field::Minute,
        column: MINUTE_COL,
        range: Some(FieldRange::new(1, 60)),
    },
    EditableField {
        field: Field::AmPm,
        column: AMPM_COL,
        range: None,
    },
    EditableField {
        field: Field::WeekDay,
        column: WDAY_COL,
        range: Some(FieldRange::new(1, 7)),
    },
    EditableField {
        field: Field::Month,
        column: MONTH_COL,
        range: Some(FieldRange::new(1, 12)),
    },
    EditableField {
        field: Field::Day,
        column: DAY_COL,
        range: Some(FieldRange::new(1, 31)),
    },
    EditableField {
        field: Field::Year,
        column: YEAR_COL,
        range: Some(FieldRange::new(2015, 2020)),
    },
];

/// Errors raised when a [`TimeInfo`] does not name a real calendar time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Year, month and day do not form a valid date (e.g. February 31)
    InvalidDate,
    /// Hour, minute or second is out of range (e.g. minute 60)
    InvalidTime,
}

/// Broken-down date and time.
///
/// `weekday` is 1-based from Sunday (1 = Sunday, 7 = Saturday) and is carried
/// for display only: it is not checked against the date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeInfo {
    second: u8,
    minute: u8,
    hour: u8,
    weekday: u8,
    day: u8,
    month: u8,
    year: u16,
    meridiem: Meridiem,
}

impl TimeInfo {
    /// Creates a record from 24-hour components; the AM/PM tag follows `hour`.
    ///
    /// Hours past 23 wrap around the day.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        let hour = hour % 24;
        Self {
            second,
            minute,
            hour,
            weekday,
            day,
            month,
            year,
            meridiem: Meridiem::from_hour(hour),
        }
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour in 24-hour form.
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Hour on a 12-hour dial (12, 1, ..., 11).
    pub const fn hour12(&self) -> u8 {
        match self.hour {
            0 => 12,
            h @ 1..=12 => h,
            h => h - 12,
        }
    }

    pub const fn weekday(&self) -> u8 {
        self.weekday
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn set_second(&mut self, second: u8) {
        self.second = second;
    }

    pub fn set_minute(&mut self, minute: u8) {
        self.minute = minute;
    }

    /// Sets the 24-hour `hour` (wrapping past 23) and re-derives the AM/PM tag.
    pub fn set_hour(&mut self, hour: u8) {
        self.hour = hour % 24;
        self.meridiem = Meridiem::from_hour(self.hour);
    }

    /// Sets the AM/PM tag and moves the hour by 12 when it disagrees.
    pub fn set_meridiem(&mut self, meridiem: Meridiem) {
        match meridiem {
            Meridiem::Pm if self.hour < 12 => self.hour += 12,
            Meridiem::Am if self.hour >= 12 => self.hour -= 12,
            _ => {}
        }
        self.meridiem = meridiem;
    }

    pub fn set_weekday(&mut self, weekday: u8) {
        self.weekday = weekday;
    }

    pub fn set_day(&mut self, day: u8) {
        self.day = day;
    }

    pub fn set_month(&mut self, month: u8) {
        self.month = month;
    }

    pub fn set_year(&mut self, year: u16) {
        self.year = year;
    }

    /// Advances `field` by one step.
    ///
    /// Numeric fields wrap within their [`EDITABLE_FIELDS`] range; AM/PM toggles
    /// and shifts the hour to keep the pair consistent.
    pub fn increment(&mut self, field: Field) {
        if field == Field::AmPm {
            self.set_meridiem(self.meridiem.toggle());
            trace!("toggled meridiem: {:?}", self.meridiem);
            return;
        }
        let Some(range) = field.descriptor().and_then(|entry| entry.range) else {
            return;
        };
        let next = range.increment(self.numeric(field));
        self.set_numeric(field, next);
        trace!("incremented {:?} to {}", field, next);
    }

    fn numeric(&self, field: Field) -> u16 {
        match field {
            Field::Hour => u16::from(self.hour),
            Field::Minute => u16::from(self.minute),
            Field::WeekDay => u16::from(self.weekday),
            Field::Month => u16::from(self.month),
            Field::Day => u16::from(self.day),
            Field::Year => self.year,
            Field::AmPm => 0,
        }
    }

    fn set_numeric(&mut self, field: Field, value: u16) {
        // Table ranges other than the year all fit in a byte.
        let narrow = u8::try_from(value).unwrap_or(u8::MAX);
        match field {
            Field::Hour => self.set_hour(narrow),
            Field::Minute => self.minute = narrow,
            Field::WeekDay => self.weekday = narrow,
            Field::Month => self.month = narrow,
            Field::Day => self.day = narrow,
            Field::Year => self.year = value,
            Field::AmPm => {}
        }
    }

    /// True when hour and minute both equal the alarm's; seconds are ignored.
    pub const fn matches_alarm(&self, alarm: &TimeInfo) -> bool {
        self.hour == alarm.hour && self.minute == alarm.minute
    }

    /// Converts to a calendar date and time. The weekday is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidDate`] or [`TimeError::InvalidTime`] when the
    /// fields do not name a real point in time.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, TimeError> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or(TimeError::InvalidDate)?;
        date.and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .ok_or(TimeError::InvalidTime)
    }
}

impl From<NaiveDateTime> for TimeInfo {
    fn from(datetime: NaiveDateTime) -> Self {
        // chrono guarantees every component below fits its target width
        let narrow = |value: u32| u8::try_from(value).unwrap_or(u8::MAX);
        TimeInfo::new(
            u16::try_from(datetime.year()).unwrap_or(u16::MAX),
            narrow(datetime.month()),
            narrow(datetime.day()),
            narrow(datetime.weekday().number_from_sunday()),
            narrow(datetime.hour()),
            narrow(datetime.minute()),
            narrow(datetime.second()),
        )
    }
}

/// True when `now` is within the alarm's minute.
///
/// This matches continuously for the whole minute; callers that want a single
/// trigger must remember that they already fired.
pub const fn is_alarm_time(now: &TimeInfo, alarm: &TimeInfo) -> bool {
    now.matches_alarm(alarm)
}
