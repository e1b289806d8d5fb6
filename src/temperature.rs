//! Temperature from an analog sensor reading.
//!
//! The sensor outputs 10 mV per degree Celsius with a 500 mV offset
//! (TMP36-style), sampled by a 10-bit ADC against a 5 V reference.

/// Converts a 10-bit ADC reading to whole degrees Fahrenheit.
///
/// Computes `trunc(((reading / 1024 * 5) - 0.5) * 100 * 1.8) + 32` exactly in
/// integer arithmetic; the truncation is toward zero.
pub fn fahrenheit(reading: u16) -> i32 {
    // celsius * 1.8 == (reading * 900 - 92160) / 1024
    (i32::from(reading) * 900 - 92_160) / 1024 + 32
}

/// Sensor output in volts.
#[cfg(feature = "temperature_f32")]
pub fn volts_f32(reading: u16) -> f32 {
    f32::from(reading) / 1024.0 * 5.0
}

/// Temperature in degrees Celsius.
#[cfg(feature = "temperature_f32")]
pub fn celsius_f32(reading: u16) -> f32 {
    (volts_f32(reading) - 0.5) * 100.0
}

/// Temperature in degrees Fahrenheit without truncation.
#[cfg(feature = "temperature_f32")]
pub fn fahrenheit_f32(reading: u16) -> f32 {
    celsius_f32(reading) * 1.8 + 32.0
}
