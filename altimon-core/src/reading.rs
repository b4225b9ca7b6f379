//! Sensor reading value type

/// One temperature/pressure sample from the barometer
///
/// Produced fresh by every successful read and dropped at the end of the
/// cycle that consumed it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
    /// Barometric pressure in hectopascals (millibar)
    pub pressure_hpa: f32,
}

impl Reading {
    /// Create a new reading
    pub const fn new(temperature_c: f32, pressure_hpa: f32) -> Self {
        Self {
            temperature_c,
            pressure_hpa,
        }
    }

    /// Check whether the pressure can be used in the altitude formula
    ///
    /// A bus transaction can succeed and still hand back zero or a
    /// non-number when the sensor is mid-reset.
    pub fn has_usable_pressure(&self) -> bool {
        self.pressure_hpa.is_finite() && self.pressure_hpa > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_pressure() {
        assert!(Reading::new(21.5, 1013.25).has_usable_pressure());
        assert!(Reading::new(-40.0, 0.01).has_usable_pressure());
    }

    #[test]
    fn test_unusable_pressure() {
        assert!(!Reading::new(21.5, 0.0).has_usable_pressure());
        assert!(!Reading::new(21.5, -1.0).has_usable_pressure());
        assert!(!Reading::new(21.5, f32::NAN).has_usable_pressure());
        assert!(!Reading::new(21.5, f32::INFINITY).has_usable_pressure());
    }
}
