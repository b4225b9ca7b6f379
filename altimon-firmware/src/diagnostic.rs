//! defmt-backed logging for the monitor

use altimon_core::traits::{DiagnosticSink, SensorError, SensorPort};
use altimon_core::Reading;
use defmt::{debug, info};

/// Forwards diagnostic lines to the RTT log
pub struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn emit(&mut self, line: &str) {
        info!("{=str}", line);
    }
}

/// Sensor wrapper that logs failed reads at debug level
pub struct LoggedSensor<S> {
    inner: S,
}

impl<S> LoggedSensor<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: SensorPort> SensorPort for LoggedSensor<S> {
    fn init(&mut self) -> Result<(), SensorError> {
        self.inner.init()
    }

    fn read(&mut self) -> Result<Reading, SensorError> {
        let result = self.inner.read();
        if let Err(e) = &result {
            debug!("Sensor read failed: {}", e);
        }
        result
    }
}
