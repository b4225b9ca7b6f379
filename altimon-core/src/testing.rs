//! Test doubles for the hardware traits

use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::reading::Reading;
use crate::traits::{DiagnosticSink, DisplayError, DisplayPort, SensorError, SensorPort};

/// Sensor that replays a fixed script of results
pub struct ScriptedSensor {
    script: VecDeque<Result<Reading, SensorError>>,
    reads: usize,
}

impl ScriptedSensor {
    pub fn new(script: impl IntoIterator<Item = Result<Reading, SensorError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reads: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl SensorPort for ScriptedSensor {
    fn init(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn read(&mut self) -> Result<Reading, SensorError> {
        self.reads += 1;
        self.script
            .pop_front()
            .unwrap_or_else(|| panic!("sensor script exhausted after {} reads", self.reads - 1))
    }
}

/// One recorded display call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Text(u16, u16, String),
    Rect(u16, u16, u16, u16, bool),
    Flush,
}

/// Display that records every call
#[derive(Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DrawOp>,
    /// When set, every flush fails
    pub fail_flush: bool,
}

impl RecordingDisplay {
    /// Text drawn between the last clear and the end of the log
    pub fn last_frame_texts(&self) -> Vec<&str> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(_, _, text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Text(x, y, text.to_string()));
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        filled: bool,
    ) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Rect(x, y, width, height, filled));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Flush);
        if self.fail_flush {
            Err(DisplayError::Communication)
        } else {
            Ok(())
        }
    }
}

/// Delay that returns immediately and remembers what was asked of it
#[derive(Default)]
pub struct RecordingDelay {
    calls: Vec<u32>,
    total_ns: u64,
}

impl RecordingDelay {
    /// Millisecond delays requested through `delay_ms`
    pub fn calls(&self) -> &[u32] {
        &self.calls
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
        self.total_ns += ms as u64 * 1_000_000;
    }
}

/// Diagnostic sink that keeps every line
#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
