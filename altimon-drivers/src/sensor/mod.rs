//! Barometric sensor implementations

pub mod bme280;

pub use self::bme280::{Bme280Sensor, SensorAddress};
