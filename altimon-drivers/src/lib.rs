//! Hardware adapter implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in altimon-core on top of `embedded-hal` 1.0 buses:
//!
//! - Barometric sensors (BME280)
//! - Displays (SSD1306 128x64 OLED)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;

pub use display::Ssd1306Panel;
pub use sensor::{Bme280Sensor, SensorAddress};
