//! Baseline pressure calibration
//!
//! At power-on the monitor captures one pressure sample and uses it as the
//! zero-altitude reference for the rest of its life. Calibration never
//! gives up: without a reference there is nothing sensible to display, so
//! a missing sensor keeps the device in this stage until it appears.

use embedded_hal::delay::DelayNs;

use crate::traits::SensorPort;

/// Zero-altitude reference pressure
///
/// Only constructible from a positive, finite pressure, so it can always
/// be used as a divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaselinePressure(f32);

impl BaselinePressure {
    /// Create a baseline, or `None` if `hpa` is zero, negative, or not finite
    pub fn new(hpa: f32) -> Option<Self> {
        if hpa.is_finite() && hpa > 0.0 {
            Some(Self(hpa))
        } else {
            None
        }
    }

    /// Reference pressure in hectopascals
    #[inline]
    pub fn hpa(&self) -> f32 {
        self.0
    }
}

/// Outcome of a completed calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// The captured reference
    pub baseline: BaselinePressure,
    /// Number of sensor reads it took, including the successful one
    pub attempts: u32,
}

/// Block until the sensor yields a usable baseline pressure
///
/// Reads once per `poll_interval_ms`. Failed reads and unusable pressures
/// are retried silently; the delay is only applied between attempts.
pub fn acquire_baseline<S, D>(
    sensor: &mut S,
    delay: &mut D,
    poll_interval_ms: u32,
) -> Calibration
where
    S: SensorPort + ?Sized,
    D: DelayNs + ?Sized,
{
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);

        if let Ok(reading) = sensor.read() {
            if let Some(baseline) = BaselinePressure::new(reading.pressure_hpa) {
                return Calibration { baseline, attempts };
            }
        }

        delay.delay_ms(poll_interval_ms);
    }
}
