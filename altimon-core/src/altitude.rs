//! Relative altitude from barometric pressure
//!
//! Uses the international barometric formula with the standard-atmosphere
//! lapse rate folded into the exponent:
//!
//! ```text
//! altitude = 44330 * (1 - (p / p0) ^ (1 / 5.255))
//! ```
//!
//! `p0` is the pressure captured at power-on, so the result is height above
//! the power-on position, not above sea level. The measured temperature is
//! deliberately not an input.

use crate::calibration::BaselinePressure;

/// Scale factor of the barometric formula, in metres
pub const ALTITUDE_SCALE_M: f32 = 44330.0;

/// Exponent of the pressure ratio (1 / 5.255)
pub const PRESSURE_EXPONENT: f32 = 1.0 / 5.255;

/// Altitude in metres of `pressure_hpa` relative to `baseline`
///
/// Zero when the pressure equals the baseline, negative when the pressure
/// is higher than the baseline (below the reference point).
pub fn relative_altitude(pressure_hpa: f32, baseline: BaselinePressure) -> f32 {
    let ratio = pressure_hpa / baseline.hpa();
    ALTITUDE_SCALE_M * (1.0 - libm::powf(ratio, PRESSURE_EXPONENT))
}
