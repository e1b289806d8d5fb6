//! Character display rendering.
//!
//! Every view is drawn as two 16-column lines. When a field is selected the
//! cursor is parked at that field's column on the second line and set to
//! blink; otherwise blinking is switched off.
//!
//! Line formats:
//!
//! | View     | Line 1              | Line 2          |
//! |----------|---------------------|-----------------|
//! | Default  | `Sun Feb 22 2015`   | `06:36:00 PM`   |
//! | TimeSet  | `Set clock time`    | `06:36 PM`      |
//! | DateSet  | `Set clock date`    | `Sun Feb 22 2015` |
//! | AlarmSet | `Set alarm time`    | `06:36 PM`      |

use core::fmt::Write;

use heapless::String;

use crate::time::{Field, TimeInfo};

/// Display width in characters.
pub const LCD_COLS: usize = 16;
/// Display height in lines.
pub const LCD_ROWS: usize = 2;

/// One full display line.
pub type Line = String<LCD_COLS>;

/// Weekday abbreviations indexed 1 (Sunday) to 7; index 0 is the error marker.
pub const STR_WEEKDAY: [&str; 8] = ["err", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month abbreviations indexed 1 (January) to 12; index 0 is the error marker.
pub const STR_MONTH: [&str; 13] = [
    "err", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LABEL_TIME: &str = "Set clock time";
const LABEL_DATE: &str = "Set clock date";
const LABEL_ALARM: &str = "Set alarm time";

/// A text-addressable character display such as an HD44780 16x2 LCD.
pub trait CharDisplay {
    type Error;

    /// Moves the cursor to `col` on `row` (both zero based).
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error>;

    /// Writes `text` at the cursor.
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Turns on the blinking cursor.
    fn blink(&mut self) -> Result<(), Self::Error>;

    /// Turns off the blinking cursor.
    fn no_blink(&mut self) -> Result<(), Self::Error>;
}

fn lookup(table: &'static [&'static str], index: u8) -> &'static str {
    table.get(usize::from(index)).copied().unwrap_or("err")
}

/// Three-letter weekday name, `"err"` outside 1..=7.
pub fn weekday_name(weekday: u8) -> &'static str {
    lookup(&STR_WEEKDAY, weekday)
}

/// Three-letter month name, `"err"` outside 1..=12.
pub fn month_name(month: u8) -> &'static str {
    lookup(&STR_MONTH, month)
}

/// Formats the date as `Www Mmm DD YYYY`.
///
/// A day past 99 or a year past 9999 is clamped so the line still fits the
/// display.
pub fn format_date(t: &TimeInfo) -> Line {
    let mut line = Line::new();
    // At most 15 characters once clamped, so this cannot overflow.
    let _ = write!(
        line,
        "{} {} {:02} {}",
        weekday_name(t.weekday()),
        month_name(t.month()),
        t.day().min(99),
        t.year().min(9999)
    );
    line
}

/// Formats the time on a 12-hour dial as `HH:MM:SS AM`.
pub fn format_time(t: &TimeInfo) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "{:02}:{:02}:{:02} {}",
        t.hour12(),
        t.minute(),
        t.second(),
        t.meridiem().as_str()
    );
    line
}

/// Formats the time on a 12-hour dial without seconds, `HH:MM AM`.
pub fn format_time_short(t: &TimeInfo) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "{:02}:{:02} {}",
        t.hour12(),
        t.minute(),
        t.meridiem().as_str()
    );
    line
}

/// Display column of `field`'s first character.
pub fn column_of(field: Field) -> u8 {
    field.column()
}

fn write_line<D: CharDisplay>(display: &mut D, row: u8, text: &str) -> Result<(), D::Error> {
    let mut padded = Line::new();
    let _ = write!(padded, "{:<width$}", text, width = LCD_COLS);
    display.set_cursor(row, 0)?;
    display.print(&padded)
}

fn render_lines<D: CharDisplay>(
    display: &mut D,
    top: &str,
    bottom: &str,
    selected: Option<Field>,
) -> Result<(), D::Error> {
    write_line(display, 0, top)?;
    write_line(display, 1, bottom)?;
    match selected {
        Some(field) => {
            display.set_cursor(1, column_of(field))?;
            display.blink()
        }
        None => display.no_blink(),
    }
}

/// Draws the current date and time.
pub fn render_default<D: CharDisplay>(display: &mut D, now: &TimeInfo) -> Result<(), D::Error> {
    render_lines(display, &format_date(now), &format_time(now), None)
}

/// Draws the clock time editor.
pub fn render_timeset<D: CharDisplay>(
    display: &mut D,
    edit: &TimeInfo,
    selected: Option<Field>,
) -> Result<(), D::Error> {
    render_lines(display, LABEL_TIME, &format_time_short(edit), selected)
}

/// Draws the clock date editor.
pub fn render_dateset<D: CharDisplay>(
    display: &mut D,
    edit: &TimeInfo,
    selected: Option<Field>,
) -> Result<(), D::Error> {
    render_lines(display, LABEL_DATE, &format_date(edit), selected)
}

/// Draws the alarm time editor.
pub fn render_alarmset<D: CharDisplay>(
    display: &mut D,
    alarm: &TimeInfo,
    selected: Option<Field>,
) -> Result<(), D::Error> {
    render_lines(display, LABEL_ALARM, &format_time_short(alarm), selected)
}

/// In-memory display used by the crate's tests.
#[cfg(test)]
pub(crate) mod testing {
    extern crate std;

    use super::{CharDisplay, LCD_COLS, LCD_ROWS};
    use std::string::String;

    /// Keeps a character grid and the cursor state like a real panel would.
    #[derive(Debug)]
    pub(crate) struct MemoryDisplay {
        pub(crate) grid: [[char; LCD_COLS]; LCD_ROWS],
        pub(crate) cursor: (u8, u8),
        pub(crate) blinking: bool,
        pub(crate) writes: usize,
    }

    impl MemoryDisplay {
        pub(crate) fn new() -> Self {
            Self {
                grid: [[' '; LCD_COLS]; LCD_ROWS],
                cursor: (0, 0),
                blinking: false,
                writes: 0,
            }
        }

        pub(crate) fn row(&self, row: usize) -> String {
            self.grid[row].iter().collect::<String>().trim_end().into()
        }
    }

    impl CharDisplay for MemoryDisplay {
        type Error = ();

        fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), ()> {
            if usize::from(row) >= LCD_ROWS || usize::from(col) >= LCD_COLS {
                return Err(());
            }
            self.cursor = (row, col);
            Ok(())
        }

        fn print(&mut self, text: &str) -> Result<(), ()> {
            let (row, mut col) = (usize::from(self.cursor.0), usize::from(self.cursor.1));
            for c in text.chars() {
                if col >= LCD_COLS {
                    return Err(());
                }
                self.grid[row][col] = c;
                col += 1;
            }
            self.cursor.1 = u8::try_from(col).map_err(|_| ())?;
            self.writes += 1;
            Ok(())
        }

        fn blink(&mut self) -> Result<(), ()> {
            self.blinking = true;
            Ok(())
        }

        fn no_blink(&mut self) -> Result<(), ()> {
            self.blinking = false;
            Ok(())
        }
    }
}
