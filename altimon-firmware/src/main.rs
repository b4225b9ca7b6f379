//! Altimon - Barometric Altitude Monitor Firmware
//!
//! Reads a BME280 over I2C, derives altitude relative to the pressure
//! captured at power-on and shows it on an SSD1306 OLED.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;
use {defmt_rtt as _, panic_probe as _};

use altimon_core::traits::{DisplayPort, SensorPort};
use altimon_core::Monitor;
use altimon_drivers::{Bme280Sensor, Ssd1306Panel};

use crate::board::BOARD;
use crate::diagnostic::{DefmtSink, LoggedSensor};

mod board;
mod diagnostic;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Altimon firmware starting...");

    let p = embassy_rp::init(Default::default());

    // I2C0: SDA = GPIO4, SCL = GPIO5
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = BOARD.i2c_frequency_hz;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let bus = RefCell::new(i2c);
    info!("I2C0 initialized at {} Hz", BOARD.i2c_frequency_hz);

    let mut display = Ssd1306Panel::new_i2c(RefCellDevice::new(&bus), BOARD.display_address);
    match display.init() {
        Ok(()) => info!("Display initialized at {=u8:#x}", BOARD.display_address),
        Err(e) => error!("Display init failed: {}, retrying on every frame", e),
    }

    let mut sensor = LoggedSensor::new(Bme280Sensor::new(
        RefCellDevice::new(&bus),
        BOARD.sensor_address,
        Delay,
    ));
    match sensor.init() {
        Ok(()) => info!("Sensor initialized at {=u8:#x}", BOARD.sensor_address.address()),
        Err(e) => warn!("Sensor init failed: {}, waiting for it during calibration", e),
    }

    info!("Waiting for baseline pressure...");
    let (mut monitor, calibration) =
        Monitor::start(sensor, display, Delay, DefmtSink, BOARD.monitor);
    info!(
        "Baseline pressure {} hPa after {} attempts",
        calibration.baseline.hpa(),
        calibration.attempts
    );

    info!("Entering monitor loop");
    monitor.run_forever()
}
