//! Barometric sensor trait

use crate::reading::Reading;

/// Errors that can occur when talking to the barometer
///
/// The control loop treats every variant the same way: the read failed.
/// The variants exist so adapters and logs can say why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed (NACK, arbitration loss, ...)
    Bus,
    /// Sensor returned data that could not be converted
    InvalidData,
}

/// Trait for combined temperature/pressure sensors
///
/// Implementations own their bus handle and any delay source they need.
/// Both calls block until the transaction completes or fails; there is no
/// timeout at this level.
pub trait SensorPort {
    /// Bring the sensor out of reset and load its calibration
    fn init(&mut self) -> Result<(), SensorError>;

    /// Take one temperature and pressure measurement
    fn read(&mut self) -> Result<Reading, SensorError>;
}

impl<T: SensorPort + ?Sized> SensorPort for &mut T {
    fn init(&mut self) -> Result<(), SensorError> {
        (**self).init()
    }

    fn read(&mut self) -> Result<Reading, SensorError> {
        (**self).read()
    }
}
