//! Monitor timing configuration

/// Delay between calibration attempts
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 500;

/// Delay between steady-state cycles
pub const DEFAULT_CYCLE_INTERVAL_MS: u32 = 1000;

/// Timing parameters for calibration and the monitor loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Delay between failed calibration reads (milliseconds)
    pub poll_interval_ms: u32,
    /// Delay after every monitor cycle (milliseconds)
    pub cycle_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MonitorConfig {
    /// Half-second calibration polling, one update per second
    pub const DEFAULT: Self = Self {
        poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        cycle_interval_ms: DEFAULT_CYCLE_INTERVAL_MS,
    };

    /// Create a config with custom intervals
    pub const fn new(poll_interval_ms: u32, cycle_interval_ms: u32) -> Self {
        Self {
            poll_interval_ms,
            cycle_interval_ms,
        }
    }
}
