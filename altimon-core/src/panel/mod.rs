//! Panel rendering
//!
//! A panel is one complete screen. There are exactly two steady-state
//! panels (data and error) plus the splash shown before calibration. Every
//! panel clears the frame buffer first and flushes last, so the display
//! never shows a mix of two panels.

pub mod format;
pub mod layout;

use crate::traits::{DisplayError, DisplayExt, DisplayPort};

use self::layout::*;

/// Input for one render call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    /// Latest reading and the altitude derived from it
    Data {
        temperature_c: f32,
        pressure_hpa: f32,
        altitude_m: f32,
    },
    /// The sensor read failed
    Error,
}

/// Which panel was rendered, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelKind {
    Data,
    Error,
}

impl PanelState {
    /// Get the kind of this panel
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelState::Data { .. } => PanelKind::Data,
            PanelState::Error => PanelKind::Error,
        }
    }
}

/// Render a complete panel and flush it
pub fn render_panel<D>(display: &mut D, panel: &PanelState) -> Result<(), DisplayError>
where
    D: DisplayPort + ?Sized,
{
    display.clear()?;

    match *panel {
        PanelState::Data {
            temperature_c,
            pressure_hpa,
            altitude_m,
        } => draw_data(display, temperature_c, pressure_hpa, altitude_m)?,
        PanelState::Error => draw_error(display)?,
    }

    display.flush()
}

/// Render the "starting" splash shown while calibration runs
pub fn render_splash<D>(display: &mut D) -> Result<(), DisplayError>
where
    D: DisplayPort + ?Sized,
{
    display.clear()?;
    display.draw_text(SPLASH_X, SPLASH_Y, SPLASH)?;
    display.flush()
}

fn draw_data<D>(
    display: &mut D,
    temperature_c: f32,
    pressure_hpa: f32,
    altitude_m: f32,
) -> Result<(), DisplayError>
where
    D: DisplayPort + ?Sized,
{
    // Header
    display.draw_text(TITLE_X, TITLE_Y, TITLE)?;
    display.hline(HEADER_RULE_Y)?;

    // Fields
    let temperature = format::with_unit(temperature_c, TEMPERATURE_UNIT);
    display.draw_field(LABEL_X, VALUE_X, TEMPERATURE_Y, TEMPERATURE_LABEL, &temperature)?;

    let pressure = format::with_unit(pressure_hpa, PRESSURE_UNIT);
    display.draw_field(LABEL_X, VALUE_X, PRESSURE_Y, PRESSURE_LABEL, &pressure)?;

    let altitude = format::with_unit(altitude_m, ALTITUDE_UNIT);
    display.draw_field(LABEL_X, VALUE_X, ALTITUDE_Y, ALTITUDE_LABEL, &altitude)?;

    // Footer
    display.hline(FOOTER_RULE_Y)?;
    display.draw_text(FOOTER_X, FOOTER_Y, FOOTER)
}

fn draw_error<D>(display: &mut D) -> Result<(), DisplayError>
where
    D: DisplayPort + ?Sized,
{
    display.draw_text(ERROR_LINE_1_X, ERROR_LINE_1_Y, ERROR_LINE_1)?;
    display.draw_text(ERROR_LINE_2_X, ERROR_LINE_2_Y, ERROR_LINE_2)
}
