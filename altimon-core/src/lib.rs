//! Board-agnostic core logic for the barometric altitude monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor, display, diagnostic sink)
//! - Baseline pressure calibration
//! - Barometric altitude model
//! - Panel layout and rendering
//! - Monitor loop state machine

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod altitude;
pub mod calibration;
pub mod config;
pub mod monitor;
pub mod panel;
pub mod reading;
pub mod traits;

#[cfg(test)]
mod testing;

pub use altitude::relative_altitude;
pub use calibration::{acquire_baseline, BaselinePressure, Calibration};
pub use config::MonitorConfig;
pub use monitor::{CycleReport, Monitor, MonitorState, StopSignal};
pub use panel::{render_panel, render_splash, PanelKind, PanelState};
pub use reading::Reading;
