//! Bosch BME280 temperature/pressure/humidity sensor
//!
//! Register access and compensation are done by the `bme280` crate; this
//! adapter only converts units and maps errors onto the core's
//! [`SensorError`]. Humidity is measured by the chip but not reported.

use altimon_core::traits::{SensorError, SensorPort};
use altimon_core::Reading;
use bme280::i2c::BME280;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Pascals per hectopascal
const PA_PER_HPA: f32 = 100.0;

/// I2C address slot selected by the SDO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorAddress {
    /// SDO tied low (0x76)
    #[default]
    Primary,
    /// SDO tied high (0x77)
    Secondary,
}

impl SensorAddress {
    /// Get the 7-bit I2C address
    pub const fn address(&self) -> u8 {
        match self {
            SensorAddress::Primary => 0x76,
            SensorAddress::Secondary => 0x77,
        }
    }
}

/// BME280 on an I2C bus
///
/// Each [`read`](SensorPort::read) triggers a forced-mode conversion and
/// blocks on `delay` until it completes. A read on a sensor that has not
/// been initialized (or was absent at power-on) runs `init` first, so a
/// late-connected sensor is picked up by the next read.
pub struct Bme280Sensor<I2C, D> {
    device: BME280<I2C>,
    delay: D,
    initialized: bool,
}

impl<I2C, D> Bme280Sensor<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new sensor adapter
    ///
    /// # Arguments
    /// - `i2c`: Bus (or shared bus device) the sensor is attached to
    /// - `address`: Which of the two BME280 addresses is strapped
    /// - `delay`: Delay source for reset and conversion waits
    pub fn new(i2c: I2C, address: SensorAddress, delay: D) -> Self {
        let device = match address {
            SensorAddress::Primary => BME280::new_primary(i2c),
            SensorAddress::Secondary => BME280::new_secondary(i2c),
        };

        Self {
            device,
            delay,
            initialized: false,
        }
    }
}

impl<I2C, D> SensorPort for Bme280Sensor<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn init(&mut self) -> Result<(), SensorError> {
        self.initialized = false;
        self.device
            .init(&mut self.delay)
            .map_err(|_| SensorError::Bus)?;
        self.initialized = true;
        Ok(())
    }

    fn read(&mut self) -> Result<Reading, SensorError> {
        if !self.initialized {
            self.init()?;
        }

        let measurements = self
            .device
            .measure(&mut self.delay)
            .map_err(|_| SensorError::Bus)?;

        to_reading(measurements.temperature, measurements.pressure)
    }
}

/// Convert raw driver units (°C, Pa) into a [`Reading`]
fn to_reading(temperature_c: f32, pressure_pa: f32) -> Result<Reading, SensorError> {
    if !temperature_c.is_finite() || !pressure_pa.is_finite() {
        return Err(SensorError::InvalidData);
    }

    Ok(Reading::new(temperature_c, pascal_to_hpa(pressure_pa)))
}

/// Convert pascals to hectopascals
#[inline]
pub fn pascal_to_hpa(pressure_pa: f32) -> f32 {
    pressure_pa / PA_PER_HPA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_to_hpa() {
        assert_eq!(pascal_to_hpa(101_325.0), 1013.25);
        assert_eq!(pascal_to_hpa(0.0), 0.0);
    }

    #[test]
    fn test_to_reading() {
        let reading = to_reading(21.5, 90_000.0).unwrap();
        assert_eq!(reading.temperature_c, 21.5);
        assert_eq!(reading.pressure_hpa, 900.0);
    }

    #[test]
    fn test_to_reading_rejects_nan() {
        assert_eq!(to_reading(f32::NAN, 90_000.0), Err(SensorError::InvalidData));
        assert_eq!(to_reading(21.5, f32::INFINITY), Err(SensorError::InvalidData));
    }

    #[test]
    fn test_addresses() {
        assert_eq!(SensorAddress::Primary.address(), 0x76);
        assert_eq!(SensorAddress::Secondary.address(), 0x77);
        assert_eq!(SensorAddress::default(), SensorAddress::Primary);
    }
}
