//! View and field selection state machine.
//!
//! The Page switch cycles views `Default -> TimeSet -> DateSet -> AlarmSet ->
//! Default`. Within an editable view the Select switch cycles the selected
//! field, starting from no selection:
//!
//! - `TimeSet` / `AlarmSet`: Hour, Minute, AM/PM
//! - `DateSet`: WeekDay, Month, Day, Year
//!
//! Once a field has been selected the cycle never returns to "no selection";
//! only changing views clears it.

use crate::time::Field;

/// Screen the clock is currently showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewMode {
    /// Current date and time, nothing editable
    Default,
    /// Edit the clock time
    TimeSet,
    /// Edit the clock date
    DateSet,
    /// Edit the alarm time
    AlarmSet,
}

const TIME_FIELDS: [Field; 3] = [Field::Hour, Field::Minute, Field::AmPm];
const DATE_FIELDS: [Field; 4] = [Field::WeekDay, Field::Month, Field::Day, Field::Year];

impl ViewMode {
    /// The view the Page switch moves to.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            ViewMode::Default => ViewMode::TimeSet,
            ViewMode::TimeSet => ViewMode::DateSet,
            ViewMode::DateSet => ViewMode::AlarmSet,
            ViewMode::AlarmSet => ViewMode::Default,
        }
    }

    /// Whether fields can be selected and adjusted in this view.
    pub const fn is_editable(self) -> bool {
        !matches!(self, ViewMode::Default)
    }

    /// Fields the Select switch cycles through, in order.
    pub const fn fields(self) -> &'static [Field] {
        match self {
            ViewMode::Default => &[],
            ViewMode::TimeSet | ViewMode::AlarmSet => &TIME_FIELDS,
            ViewMode::DateSet => &DATE_FIELDS,
        }
    }

    /// The selection the Select switch moves to.
    ///
    /// Returns `None` for the Default view and for a selection that does not
    /// belong to this view.
    pub fn next_field(self, selected: Option<Field>) -> Option<Field> {
        let fields = self.fields();
        match selected {
            None => fields.first().copied(),
            Some(current) => {
                let index = fields.iter().position(|&f| f == current)?;
                fields.get((index + 1) % fields.len()).copied()
            }
        }
    }
}

/// See [`ViewMode::next`].
pub const fn next_view(view: ViewMode) -> ViewMode {
    view.next()
}

/// See [`ViewMode::is_editable`].
pub const fn is_editable(view: ViewMode) -> bool {
    view.is_editable()
}

/// See [`ViewMode::next_field`].
pub fn next_field(view: ViewMode, selected: Option<Field>) -> Option<Field> {
    view.next_field(selected)
}
