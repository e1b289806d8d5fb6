//! Three-switch input polling.
//!
//! The switches are read once per control-loop iteration in fixed priority
//! order Adjust, Select, Page. There is no debouncing or edge detection: a
//! switch held down is reported on every poll.

use embedded_hal::digital::InputPin;

/// A momentary switch on the clock face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    /// Increment the selected field
    Adjust,
    /// Select the next field
    Select,
    /// Show the next view
    Page,
}

/// Electrical level at which a switch counts as pressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed reads high (pull-down wiring)
    #[default]
    High,
    /// Pressed reads low (pull-up wiring)
    Low,
}

/// The Adjust, Select and Page switches.
pub struct Switches<A, S, P> {
    adjust: A,
    select: S,
    page: P,
    level: ActiveLevel,
}

impl<A, S, P, E> Switches<A, S, P>
where
    A: InputPin<Error = E>,
    S: InputPin<Error = E>,
    P: InputPin<Error = E>,
{
    pub fn new(adjust: A, select: S, page: P, level: ActiveLevel) -> Self {
        Self {
            adjust,
            select,
            page,
            level,
        }
    }

    /// Returns the highest priority switch that is pressed, if any.
    ///
    /// # Errors
    ///
    /// Returns the pin error if a read fails; later switches are not read.
    pub fn poll(&mut self) -> Result<Option<Switch>, E> {
        if Self::pressed(&mut self.adjust, self.level)? {
            return Ok(Some(Switch::Adjust));
        }
        if Self::pressed(&mut self.select, self.level)? {
            return Ok(Some(Switch::Select));
        }
        if Self::pressed(&mut self.page, self.level)? {
            return Ok(Some(Switch::Page));
        }
        Ok(None)
    }

    fn pressed<T: InputPin<Error = E>>(pin: &mut T, level: ActiveLevel) -> Result<bool, E> {
        match level {
            ActiveLevel::High => pin.is_high(),
            ActiveLevel::Low => pin.is_low(),
        }
    }

    /// Gives the pins back.
    pub fn release(self) -> (A, S, P) {
        (self.adjust, self.select, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTrans,
    };

    fn untouched() -> PinMock {
        PinMock::new(&[] as &[PinTrans])
    }

    fn done(switches: Switches<PinMock, PinMock, PinMock>) {
        let (mut adjust, mut select, mut page) = switches.release();
        adjust.done();
        select.done();
        page.done();
    }

    #[test]
    fn test_poll_none_pressed() {
        let adjust = PinMock::new(&[PinTrans::get(PinState::Low)]);
        let select = PinMock::new(&[PinTrans::get(PinState::Low)]);
        let page = PinMock::new(&[PinTrans::get(PinState::Low)]);
        let mut switches = Switches::new(adjust, select, page, ActiveLevel::High);

        assert_eq!(switches.poll().unwrap(), None);
        done(switches);
    }

    #[test]
    fn test_poll_adjust_wins_over_others() {
        // Adjust pressed: select and page are never read
        let adjust = PinMock::new(&[PinTrans::get(PinState::High)]);
        let select = untouched();
        let page = untouched();
        let mut switches = Switches::new(adjust, select, page, ActiveLevel::High);

        assert_eq!(switches.poll().unwrap(), Some(Switch::Adjust));
        done(switches);
    }

    #[test]
    fn test_poll_select_then_page() {
        let adjust = PinMock::new(&[PinTrans::get(PinState::Low), PinTrans::get(PinState::Low)]);
        let select = PinMock::new(&[PinTrans::get(PinState::High), PinTrans::get(PinState::Low)]);
        let page = PinMock::new(&[PinTrans::get(PinState::High)]);
        let mut switches = Switches::new(adjust, select, page, ActiveLevel::High);

        assert_eq!(switches.poll().unwrap(), Some(Switch::Select));
        assert_eq!(switches.poll().unwrap(), Some(Switch::Page));
        done(switches);
    }

    #[test]
    fn test_poll_held_switch_repeats() {
        let adjust = PinMock::new(&[
            PinTrans::get(PinState::High),
            PinTrans::get(PinState::High),
            PinTrans::get(PinState::High),
        ]);
        let mut switches =
            Switches::new(adjust, untouched(), untouched(), ActiveLevel::High);

        for _ in 0..3 {
            assert_eq!(switches.poll().unwrap(), Some(Switch::Adjust));
        }
        done(switches);
    }

    #[test]
    fn test_poll_active_low() {
        let adjust = PinMock::new(&[PinTrans::get(PinState::High)]);
        let select = PinMock::new(&[PinTrans::get(PinState::Low)]);
        let page = untouched();
        let mut switches = Switches::new(adjust, select, page, ActiveLevel::Low);

        assert_eq!(switches.poll().unwrap(), Some(Switch::Select));
        done(switches);
    }
}
