//! Hardware abstraction traits
//!
//! These traits define the interface between the monitor logic
//! and board-specific implementations.

pub mod diagnostic;
pub mod display;
pub mod sensor;

pub use diagnostic::DiagnosticSink;
pub use display::{DisplayError, DisplayExt, DisplayPort, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use sensor::{SensorError, SensorPort};
