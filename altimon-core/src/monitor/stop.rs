//! Loop cancellation

use core::sync::atomic::{AtomicBool, Ordering};

/// Tells the monitor loop when to return
///
/// Checked once before every cycle. Production firmware never stops the
/// loop; the signal exists so tests can run a bounded number of cycles.
pub trait StopSignal {
    /// Return true to end the loop before the next cycle
    fn should_stop(&self) -> bool;
}

impl StopSignal for AtomicBool {
    fn should_stop(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: StopSignal + ?Sized> StopSignal for &T {
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}
