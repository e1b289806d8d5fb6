//! Async control loop for the alarm clock.
//!
//! This module provides tick and step variants that await an
//! `embedded-hal-async` delay instead of blocking, so the pause between ticks
//! can be shared with other tasks on an async executor. It is only available
//! when the `async` feature is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use alarm_clock::{AlarmClock, Config};
//!
//! let mut alarm_clock = AlarmClock::new(lcd, clock, adjust, select, page, Config::default())?;
//! loop {
//!     alarm_clock.step_async(&mut delay).await?;
//! }
//! ```

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::{AlarmClock, AlarmClockError, CharDisplay, Switch, SystemClock};

impl<D, C, A, S, P, E> AlarmClock<D, C, A, S, P>
where
    D: CharDisplay,
    C: SystemClock,
    A: InputPin<Error = E>,
    S: InputPin<Error = E>,
    P: InputPin<Error = E>,
{
    /// Awaits the tick period, then advances the clock.
    pub async fn tick_async<DL: DelayNs>(&mut self, delay: &mut DL) {
        delay.delay_ms(self.config().tick_period_ms).await;
        self.advance();
    }

    /// Runs one control-loop iteration: poll, update, render, then await the tick.
    ///
    /// # Errors
    ///
    /// Returns an [`AlarmClockError`] if reading a switch or writing to the
    /// display fails; the tick is skipped in that case.
    pub async fn step_async<DL: DelayNs>(
        &mut self,
        delay: &mut DL,
    ) -> Result<Option<Switch>, AlarmClockError<D::Error, E>> {
        let switch = self.update()?;
        self.tick_async(delay).await;
        Ok(switch)
    }
}
