//! Diagnostic text output

/// Sink for the one-line-per-reading diagnostic log
///
/// Delivery is best-effort; implementations must not block the control
/// loop waiting for a reader (e.g. a detached debug probe).
pub trait DiagnosticSink {
    /// Emit one complete line (without trailing newline)
    fn emit(&mut self, line: &str);
}

/// Sink that discards everything
impl DiagnosticSink for () {
    fn emit(&mut self, _line: &str) {}
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, line: &str) {
        (**self).emit(line)
    }
}
