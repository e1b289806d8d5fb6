//! The alarm clock controller.
//!
//! [`AlarmClock`] owns the display, the system clock and the three switches,
//! and holds the three time records the user works with:
//!
//! - "now", read from the [`SystemClock`] whenever it is needed,
//! - the alarm threshold, edited in place in the AlarmSet view,
//! - the edit copy, changed in the TimeSet and DateSet views and only written
//!   to the clock when the user pages out of the view it was changed in.
//!
//! Entering TimeSet from the Default view reloads the edit copy from the clock
//! so editing starts from the current time.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::clock::SystemClock;
use crate::display::{self, CharDisplay};
use crate::input::{Switch, Switches};
use crate::time::{self, Field, TimeError, TimeInfo};
use crate::view::ViewMode;
use crate::{AlarmClockError, Config};

/// Alarm clock user interface state machine.
pub struct AlarmClock<D, C, A, S, P> {
    display: D,
    clock: C,
    switches: Switches<A, S, P>,
    config: Config,
    view: ViewMode,
    selected: Option<Field>,
    alarm: TimeInfo,
    edit: TimeInfo,
    edit_dirty: bool,
}

impl<D, C, A, S, P, E> AlarmClock<D, C, A, S, P>
where
    D: CharDisplay,
    C: SystemClock,
    A: InputPin<Error = E>,
    S: InputPin<Error = E>,
    P: InputPin<Error = E>,
{
    /// Creates the controller and seeds the clock from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmClockError::Clock`] if the seed is not a valid calendar
    /// time.
    pub fn new(
        display: D,
        clock: C,
        adjust: A,
        select: S,
        page: P,
        config: Config,
    ) -> Result<Self, AlarmClockError<D::Error, E>> {
        let mut alarm_clock = Self {
            display,
            clock,
            switches: Switches::new(adjust, select, page, config.switch_level),
            config,
            view: ViewMode::Default,
            selected: None,
            alarm: config.seed,
            edit: config.seed,
            edit_dirty: false,
        };
        alarm_clock.seed(&config.seed)?;
        Ok(alarm_clock)
    }

    /// Sets the clock to `seed` and resets the alarm and the edit copy to it.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmClockError::Clock`] if `seed` is not a valid calendar
    /// time; nothing is changed in that case.
    pub fn seed(&mut self, seed: &TimeInfo) -> Result<(), AlarmClockError<D::Error, E>> {
        self.clock.set(seed.to_datetime()?);
        self.alarm = *seed;
        self.edit = *seed;
        self.edit_dirty = false;
        info!("clock seeded: {:?}", seed);
        Ok(())
    }

    /// Writes the edit copy to the clock.
    ///
    /// # Errors
    ///
    /// Returns [`AlarmClockError::Clock`] if the edit copy is not a valid
    /// calendar time (for example February 30, or minute 60); the clock keeps
    /// its time.
    pub fn commit(&mut self) -> Result<(), AlarmClockError<D::Error, E>> {
        Ok(self.commit_edit()?)
    }

    fn commit_edit(&mut self) -> Result<(), TimeError> {
        let datetime = self.edit.to_datetime()?;
        self.clock.set(datetime);
        self.edit_dirty = false;
        info!("clock set: {:?}", self.edit);
        Ok(())
    }

    /// Applies one switch press.
    pub fn handle(&mut self, switch: Switch) {
        match switch {
            Switch::Page => self.page(),
            Switch::Select => {
                self.selected = self.view.next_field(self.selected);
                debug!("selected: {:?}", self.selected);
            }
            Switch::Adjust => self.adjust(),
        }
    }

    fn page(&mut self) {
        if self.edit_dirty {
            if self.view == ViewMode::DateSet {
                // Only the date was edited; keep the clock's time of day.
                let now = self.now();
                self.edit.set_hour(now.hour());
                self.edit.set_minute(now.minute());
                self.edit.set_second(now.second());
            }
            if let Err(e) = self.commit_edit() {
                warn!("edit rejected, clock unchanged: {:?}", e);
                self.edit_dirty = false;
            }
        }

        let previous = self.view;
        self.view = self.view.next();
        self.selected = None;
        if previous == ViewMode::Default && self.view == ViewMode::TimeSet {
            self.edit = self.now();
        }
        debug!("view: {:?} -> {:?}", previous, self.view);
    }

    fn adjust(&mut self) {
        let Some(field) = self.selected else {
            return;
        };
        match self.view {
            ViewMode::Default => {}
            ViewMode::AlarmSet => self.alarm.increment(field),
            ViewMode::TimeSet | ViewMode::DateSet => {
                self.edit.increment(field);
                self.edit_dirty = true;
            }
        }
    }

    /// Redraws the current view.
    ///
    /// # Errors
    ///
    /// Returns the display error if a write fails.
    pub fn render(&mut self) -> Result<(), D::Error> {
        match self.view {
            ViewMode::Default => {
                let now = self.now();
                display::render_default(&mut self.display, &now)
            }
            ViewMode::TimeSet => {
                display::render_timeset(&mut self.display, &self.edit, self.selected)
            }
            ViewMode::DateSet => {
                display::render_dateset(&mut self.display, &self.edit, self.selected)
            }
            ViewMode::AlarmSet => {
                display::render_alarmset(&mut self.display, &self.alarm, self.selected)
            }
        }
    }

    /// Polls the switches, applies any press and redraws.
    ///
    /// Returns the switch that was pressed, if any.
    ///
    /// # Errors
    ///
    /// Returns an [`AlarmClockError`] if reading a switch or writing to the
    /// display fails.
    pub fn update(&mut self) -> Result<Option<Switch>, AlarmClockError<D::Error, E>> {
        let switch = self.switches.poll().map_err(AlarmClockError::Input)?;
        if let Some(switch) = switch {
            trace!("switch: {:?}", switch);
            self.handle(switch);
        }
        self.render().map_err(AlarmClockError::Display)?;
        Ok(switch)
    }

    /// Pauses for the tick period and advances the clock.
    ///
    /// The clock only tracks real time if ticks are issued back to back, so
    /// any other work in the loop makes it run slow.
    pub fn tick<DL: DelayNs>(&mut self, delay: &mut DL) {
        delay.delay_ms(self.config.tick_period_ms);
        self.advance();
    }

    pub(crate) fn advance(&mut self) {
        self.clock.adjust(self.config.tick_adjustment_us);
    }

    /// Runs one control-loop iteration: poll, update, render, tick.
    ///
    /// # Errors
    ///
    /// Returns an [`AlarmClockError`] from [`update`](Self::update); the tick is
    /// skipped in that case.
    pub fn step<DL: DelayNs>(
        &mut self,
        delay: &mut DL,
    ) -> Result<Option<Switch>, AlarmClockError<D::Error, E>> {
        let switch = self.update()?;
        self.tick(delay);
        Ok(switch)
    }

    /// True while the clock is within the alarm's minute.
    ///
    /// This stays true for the whole minute; callers wanting a single trigger
    /// must remember that they already fired.
    pub fn is_alarm_time(&self) -> bool {
        let matched = time::is_alarm_time(&self.now(), &self.alarm);
        if matched {
            trace!("alarm time reached");
        }
        matched
    }

    /// The clock's current time.
    pub fn now(&self) -> TimeInfo {
        TimeInfo::from(self.clock.now())
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selected(&self) -> Option<Field> {
        self.selected
    }

    pub fn alarm(&self) -> &TimeInfo {
        &self.alarm
    }

    /// The time being edited in the TimeSet and DateSet views.
    pub fn edit(&self) -> &TimeInfo {
        &self.edit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Gives back the display, the clock and the switch pins.
    pub fn release(self) -> (D, C, A, S, P) {
        let (adjust, select, page) = self.switches.release();
        (self.display, self.clock, adjust, select, page)
    }
}
