//! Monitor loop state machine
//!
//! One cycle walks `Idle -> Reading -> (Rendering | ErrorRendering) -> Idle`.
//! There is no terminal state; the loop only ends when its stop signal
//! says so (never, in production).

/// Monitor loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// Waiting out the cycle interval
    Idle,
    /// Blocking on the sensor
    Reading,
    /// Drawing the data panel and logging the reading
    Rendering,
    /// Drawing the error panel
    ErrorRendering,
}

/// Events that move the monitor between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorEvent {
    /// Cycle interval elapsed (or first cycle after calibration)
    CycleStarted,
    /// Sensor returned a usable reading
    ReadSucceeded,
    /// Sensor read failed or returned an unusable pressure
    ReadFailed,
    /// Panel was drawn (successfully or not) and flushed
    PanelShown,
}

impl MonitorState {
    /// Check if the monitor is presenting something on the display
    pub fn is_rendering(&self) -> bool {
        matches!(self, MonitorState::Rendering | MonitorState::ErrorRendering)
    }

    /// Process an event and return the next state
    ///
    /// Events that make no sense in the current state leave it unchanged.
    pub fn transition(self, event: MonitorEvent) -> Self {
        use MonitorEvent::*;
        use MonitorState::*;

        match (self, event) {
            (Idle, CycleStarted) => Reading,

            (Reading, ReadSucceeded) => Rendering,
            (Reading, ReadFailed) => ErrorRendering,

            (Rendering, PanelShown) => Idle,
            (ErrorRendering, PanelShown) => Idle,

            // Invalid transitions - stay in current state
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_cycle() {
        let mut state = MonitorState::Idle;

        state = state.transition(MonitorEvent::CycleStarted);
        assert_eq!(state, MonitorState::Reading);

        state = state.transition(MonitorEvent::ReadSucceeded);
        assert_eq!(state, MonitorState::Rendering);
        assert!(state.is_rendering());

        state = state.transition(MonitorEvent::PanelShown);
        assert_eq!(state, MonitorState::Idle);
    }

    #[test]
    fn test_failure_cycle() {
        let state = MonitorState::Idle
            .transition(MonitorEvent::CycleStarted)
            .transition(MonitorEvent::ReadFailed);
        assert_eq!(state, MonitorState::ErrorRendering);
        assert!(state.is_rendering());

        assert_eq!(state.transition(MonitorEvent::PanelShown), MonitorState::Idle);
    }

    #[test]
    fn test_invalid_transitions_ignored() {
        assert_eq!(
            MonitorState::Idle.transition(MonitorEvent::ReadSucceeded),
            MonitorState::Idle
        );
        assert_eq!(
            MonitorState::Reading.transition(MonitorEvent::PanelShown),
            MonitorState::Reading
        );
        assert_eq!(
            MonitorState::Rendering.transition(MonitorEvent::ReadFailed),
            MonitorState::Rendering
        );
        assert_eq!(
            MonitorState::ErrorRendering.transition(MonitorEvent::CycleStarted),
            MonitorState::ErrorRendering
        );
    }
}
