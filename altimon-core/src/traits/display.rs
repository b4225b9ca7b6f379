//! Display trait for the monochrome OLED panel

/// Width of the canvas the panel layouts are designed for
pub const CANVAS_WIDTH: u16 = 128;

/// Height of the canvas the panel layouts are designed for
pub const CANVAS_HEIGHT: u16 = 64;

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Trait for a buffered monochrome display
///
/// Drawing calls only touch the frame buffer; nothing reaches the glass
/// until [`flush`](DisplayPort::flush). Coordinates are pixel offsets from
/// the top-left corner, text is anchored at the top-left of its first glyph.
pub trait DisplayPort {
    /// Initialize the display controller
    ///
    /// The bus handle and device address are given to the adapter when it
    /// is constructed.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the entire frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError>;

    /// Fill (or erase, when `filled` is false) a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        filled: bool,
    ) -> Result<(), DisplayError>;

    /// Send the frame buffer to the display
    fn flush(&mut self) -> Result<(), DisplayError>;
}

impl<T: DisplayPort + ?Sized> DisplayPort for &mut T {
    fn init(&mut self) -> Result<(), DisplayError> {
        (**self).init()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        (**self).draw_text(x, y, text)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        filled: bool,
    ) -> Result<(), DisplayError> {
        (**self).fill_rect(x, y, width, height, filled)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        (**self).flush()
    }
}

/// Helper trait for drawing common panel elements
pub trait DisplayExt: DisplayPort {
    /// Draw a full-width, one pixel high separator line at row `y`
    fn hline(&mut self, y: u16) -> Result<(), DisplayError> {
        self.fill_rect(0, y, CANVAS_WIDTH, 1, true)
    }

    /// Draw a label and its value at fixed column offsets on the same row
    fn draw_field(
        &mut self,
        label_x: u16,
        value_x: u16,
        y: u16,
        label: &str,
        value: &str,
    ) -> Result<(), DisplayError> {
        self.draw_text(label_x, y, label)?;
        self.draw_text(value_x, y, value)
    }
}

// Blanket implementation for all DisplayPort types
impl<T: DisplayPort + ?Sized> DisplayExt for T {}
