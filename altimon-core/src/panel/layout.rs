//! Fixed panel geometry and strings
//!
//! Pixel coordinates for a 128x64 canvas with a 5x8 font. Rows are 12
//! pixels apart; values start far enough right that the longest label
//! ("Pressure:") never touches them.

/// Header title
pub const TITLE: &str = "BARO MONITOR";
pub const TITLE_X: u16 = 34;
pub const TITLE_Y: u16 = 0;

/// Separator under the header
pub const HEADER_RULE_Y: u16 = 10;

/// Column of the field labels
pub const LABEL_X: u16 = 4;

/// Column of the field values
pub const VALUE_X: u16 = 60;

pub const TEMPERATURE_LABEL: &str = "Temp:";
pub const TEMPERATURE_Y: u16 = 15;
pub const TEMPERATURE_UNIT: &str = "C";

pub const PRESSURE_LABEL: &str = "Pressure:";
pub const PRESSURE_Y: u16 = 27;
pub const PRESSURE_UNIT: &str = "hPa";

pub const ALTITUDE_LABEL: &str = "Altitude:";
pub const ALTITUDE_Y: u16 = 39;
pub const ALTITUDE_UNIT: &str = "m";

/// Separator above the footer
pub const FOOTER_RULE_Y: u16 = 50;

/// Footer text
pub const FOOTER: &str = "Pico - I2C";
pub const FOOTER_X: u16 = 39;
pub const FOOTER_Y: u16 = 54;

/// Error panel lines
pub const ERROR_LINE_1: &str = "Read error!";
pub const ERROR_LINE_1_X: u16 = 10;
pub const ERROR_LINE_1_Y: u16 = 20;
pub const ERROR_LINE_2: &str = "Check sensor";
pub const ERROR_LINE_2_X: u16 = 10;
pub const ERROR_LINE_2_Y: u16 = 35;

/// Splash shown while waiting for calibration
pub const SPLASH: &str = "Starting...";
pub const SPLASH_X: u16 = 20;
pub const SPLASH_Y: u16 = 20;
