//! Steady-state monitor loop
//!
//! Startup is two-phase: [`Monitor::start`] shows the splash and blocks in
//! calibration until a baseline exists, then hands back a monitor that owns
//! that baseline for the rest of its life. Each [`Monitor::cycle`] reads
//! the sensor once, renders exactly one panel, and sleeps.

pub mod machine;
pub mod stop;

pub use machine::{MonitorEvent, MonitorState};
pub use stop::StopSignal;

use embedded_hal::delay::DelayNs;

use crate::altitude::relative_altitude;
use crate::calibration::{acquire_baseline, BaselinePressure, Calibration};
use crate::config::MonitorConfig;
use crate::panel::{format, render_panel, render_splash, PanelKind, PanelState};
use crate::reading::Reading;
use crate::traits::{DiagnosticSink, DisplayError, DisplayPort, SensorPort};

/// What happened during one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Panel that was rendered
    pub panel: PanelState,
    /// Result of drawing it; a failure does not change control flow
    pub display: Result<(), DisplayError>,
}

impl CycleReport {
    /// Get the kind of panel that was rendered
    pub fn kind(&self) -> PanelKind {
        self.panel.kind()
    }
}

/// The sensor-to-display control loop
pub struct Monitor<S, D, T, L> {
    sensor: S,
    display: D,
    delay: T,
    sink: L,
    baseline: BaselinePressure,
    config: MonitorConfig,
    state: MonitorState,
}

impl<S, D, T, L> Monitor<S, D, T, L>
where
    S: SensorPort,
    D: DisplayPort,
    T: DelayNs,
    L: DiagnosticSink,
{
    /// Create a monitor around an already captured baseline
    pub fn new(
        sensor: S,
        display: D,
        delay: T,
        sink: L,
        baseline: BaselinePressure,
        config: MonitorConfig,
    ) -> Self {
        Self {
            sensor,
            display,
            delay,
            sink,
            baseline,
            config,
            state: MonitorState::Idle,
        }
    }

    /// Show the splash, calibrate, and build the monitor
    ///
    /// Blocks until the sensor produces a usable pressure. Display errors
    /// while drawing the splash are ignored. The calibration outcome is
    /// returned alongside the monitor for logging.
    pub fn start(
        mut sensor: S,
        mut display: D,
        mut delay: T,
        sink: L,
        config: MonitorConfig,
    ) -> (Self, Calibration) {
        render_splash(&mut display).ok();

        let calibration = acquire_baseline(&mut sensor, &mut delay, config.poll_interval_ms);
        let monitor = Self::new(sensor, display, delay, sink, calibration.baseline, config);

        (monitor, calibration)
    }

    /// Reference pressure captured at startup
    pub fn baseline(&self) -> BaselinePressure {
        self.baseline
    }

    /// Current state of the loop state machine
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Run one acquire / render / wait cycle
    pub fn cycle(&mut self) -> CycleReport {
        self.advance(MonitorEvent::CycleStarted);

        let reading = self.sensor.read().ok().filter(Reading::has_usable_pressure);

        let panel = match reading {
            Some(reading) => {
                self.advance(MonitorEvent::ReadSucceeded);
                PanelState::Data {
                    temperature_c: reading.temperature_c,
                    pressure_hpa: reading.pressure_hpa,
                    altitude_m: relative_altitude(reading.pressure_hpa, self.baseline),
                }
            }
            None => {
                self.advance(MonitorEvent::ReadFailed);
                PanelState::Error
            }
        };

        let display = render_panel(&mut self.display, &panel);

        if let PanelState::Data {
            temperature_c,
            pressure_hpa,
            altitude_m,
        } = panel
        {
            let line = format::diagnostic_line(temperature_c, pressure_hpa, altitude_m);
            self.sink.emit(&line);
        }

        self.advance(MonitorEvent::PanelShown);
        self.delay.delay_ms(self.config.cycle_interval_ms);

        CycleReport { panel, display }
    }

    /// Run cycles until `stop` fires
    ///
    /// Returns the number of completed cycles.
    pub fn run_until<X: StopSignal + ?Sized>(&mut self, stop: &X) -> u32 {
        let mut cycles: u32 = 0;
        while !stop.should_stop() {
            self.cycle();
            cycles = cycles.wrapping_add(1);
        }
        cycles
    }

    /// Run cycles until power loss or reset
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    fn advance(&mut self, event: MonitorEvent) {
        self.state = self.state.transition(event);
    }
}
