//! Board configuration
//!
//! Values come from `board.toml`, validated and turned into Rust by
//! `build.rs`. Edit board.toml and rebuild to change them.

use altimon_core::MonitorConfig;
use altimon_drivers::SensorAddress;

/// Wiring and timing for one board
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// I2C0 bus clock
    pub i2c_frequency_hz: u32,
    /// 7-bit address of the SSD1306
    pub display_address: u8,
    /// BME280 address slot
    pub sensor_address: SensorAddress,
    /// Calibration poll and cycle intervals
    pub monitor: MonitorConfig,
}

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
