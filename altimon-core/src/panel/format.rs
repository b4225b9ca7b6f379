//! Fixed-point text formatting for panel values and log lines

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted value with its unit ("-12345.67 hPa")
pub const VALUE_LEN: usize = 16;

/// Capacity of one diagnostic log line
pub const LINE_LEN: usize = 80;

/// Shown in place of a value that is not finite or does not fit its buffer
pub const OVERFLOW_TEXT: &str = "----";

/// Format `value` with exactly two decimal places
///
/// Rounds to the nearest hundredth, keeps the sign of negative values,
/// and never switches to exponent notation.
pub fn fixed2(value: f32) -> String<VALUE_LEN> {
    with_unit(value, "")
}

/// Format `value` with two decimal places followed by a space and `unit`
///
/// An empty `unit` produces just the number. NaN and infinities render as
/// [`OVERFLOW_TEXT`].
pub fn with_unit(value: f32, unit: &str) -> String<VALUE_LEN> {
    let mut out = String::new();
    let written = if !value.is_finite() {
        Err(core::fmt::Error)
    } else if unit.is_empty() {
        write!(out, "{:.2}", value)
    } else {
        write!(out, "{:.2} {}", value, unit)
    };

    if written.is_err() {
        out.clear();
        let _ = out.push_str(OVERFLOW_TEXT);
    }
    out
}

/// Build the per-reading diagnostic line
///
/// `Temp: 21.50C | Pressure: 1013.25hPa | Alt: 0.00m`
pub fn diagnostic_line(
    temperature_c: f32,
    pressure_hpa: f32,
    altitude_m: f32,
) -> String<LINE_LEN> {
    let mut out = String::new();
    if write!(
        out,
        "Temp: {:.2}C | Pressure: {:.2}hPa | Alt: {:.2}m",
        temperature_c, pressure_hpa, altitude_m
    )
    .is_err()
    {
        out.clear();
        let _ = out.push_str(OVERFLOW_TEXT);
    }
    out
}
