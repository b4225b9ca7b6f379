//! SSD1306 OLED display
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. The controller
//! protocol and frame buffer live in the `ssd1306` crate; glyphs and
//! primitives come from `embedded-graphics`. Text is drawn with a 5x8 font
//! anchored at its top-left corner.

use altimon_core::traits::{DisplayError, DisplayPort};
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Buffered<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 panel in buffered graphics mode
///
/// A panel whose `init` failed (or never ran) retries it at the start of
/// the next frame ([`clear`](DisplayPort::clear)), so a display that was
/// absent or glitched at power-on lights up once the bus recovers.
pub struct Ssd1306Panel<DI> {
    display: Buffered<DI>,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306Panel<I2CInterface<I2C>> {
    /// Create a panel on an I2C bus at `address`
    pub fn new_i2c(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        Self::new(interface)
    }
}

impl<DI: WriteOnlyDataCommand> Ssd1306Panel<DI> {
    /// Create a panel on any display interface
    pub fn new(interface: DI) -> Self {
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Check if `init` has completed successfully
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<DI: WriteOnlyDataCommand> DisplayPort for Ssd1306Panel<DI> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        self.display
            .init()
            .map_err(|_| DisplayError::Communication)?;
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        // Controller init blanks the frame buffer
        if !self.initialized {
            self.init()?;
        }
        clear_target(&mut self.display)
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        draw_text_on(&mut self.display, x, y, text)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        filled: bool,
    ) -> Result<(), DisplayError> {
        fill_rect_on(&mut self.display, x, y, width, height, filled)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.display
            .flush()
            .map_err(|_| DisplayError::Communication)
    }
}

/// Blank the whole target
fn clear_target<T>(target: &mut T) -> Result<(), DisplayError>
where
    T: DrawTarget<Color = BinaryColor>,
{
    target
        .clear(BinaryColor::Off)
        .map_err(|_| DisplayError::Communication)
}

/// Draw `text` with its top-left corner at (`x`, `y`)
fn draw_text_on<T>(target: &mut T, x: u16, y: u16, text: &str) -> Result<(), DisplayError>
where
    T: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
    Text::with_baseline(text, point(x, y), style, Baseline::Top)
        .draw(target)
        .map_err(|_| DisplayError::Communication)?;
    Ok(())
}

/// Fill a rectangle with on (`filled`) or off pixels
fn fill_rect_on<T>(
    target: &mut T,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    filled: bool,
) -> Result<(), DisplayError>
where
    T: DrawTarget<Color = BinaryColor>,
{
    let color = if filled {
        BinaryColor::On
    } else {
        BinaryColor::Off
    };

    Rectangle::new(point(x, y), Size::new(width as u32, height as u32))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
        .map_err(|_| DisplayError::Communication)
}

fn point(x: u16, y: u16) -> Point {
    Point::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use display_interface::{DataFormat, DisplayError as BusError, WriteOnlyDataCommand};
    use embedded_graphics::mock_display::MockDisplay;

    /// Interface whose first `failures` command writes fail
    struct FlakyInterface {
        failures: usize,
        commands: usize,
        data: usize,
    }

    impl FlakyInterface {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                commands: 0,
                data: 0,
            }
        }
    }

    impl WriteOnlyDataCommand for FlakyInterface {
        fn send_commands(&mut self, _cmd: DataFormat<'_>) -> Result<(), BusError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(BusError::BusWriteError);
            }
            self.commands += 1;
            Ok(())
        }

        fn send_data(&mut self, _buf: DataFormat<'_>) -> Result<(), BusError> {
            self.data += 1;
            Ok(())
        }
    }

    fn lit_pixels(display: &MockDisplay<BinaryColor>, area: Rectangle) -> usize {
        area.points()
            .filter(|p| display.get_pixel(*p) == Some(BinaryColor::On))
            .count()
    }

    #[test]
    fn test_fill_rect_draws_exact_area() {
        let mut display = MockDisplay::new();

        fill_rect_on(&mut display, 2, 10, 20, 1, true).unwrap();

        assert_eq!(display.get_pixel(Point::new(2, 10)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(21, 10)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(22, 10)), None);
        assert_eq!(display.get_pixel(Point::new(2, 11)), None);
        assert_eq!(display.get_pixel(Point::new(1, 10)), None);
    }

    #[test]
    fn test_fill_rect_erase() {
        let mut display = MockDisplay::new();

        fill_rect_on(&mut display, 0, 0, 4, 4, false).unwrap();

        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_text_is_top_anchored() {
        let mut display = MockDisplay::new();

        draw_text_on(&mut display, 4, 15, "8").unwrap();

        // All glyph pixels fall inside the 5x8 cell below and right of the anchor
        let cell = Rectangle::new(Point::new(4, 15), Size::new(5, 8));
        assert!(lit_pixels(&display, cell) > 0);

        let above = Rectangle::new(Point::new(0, 0), Size::new(64, 15));
        assert_eq!(lit_pixels(&display, above), 0);
    }

    #[test]
    fn test_init_failure_recovers_on_next_frame() {
        let mut panel = Ssd1306Panel::new(FlakyInterface::new(1));

        assert_eq!(panel.init(), Err(DisplayError::Communication));
        assert!(!panel.is_initialized());

        panel.clear().unwrap();
        assert!(panel.is_initialized());
        panel.draw_text(10, 20, "Read error!").unwrap();
        assert_eq!(panel.flush(), Ok(()));

        let interface = panel.display.release();
        assert!(interface.commands > 0);
        assert!(interface.data > 0);
    }

    #[test]
    fn test_clear_keeps_retrying_while_bus_is_down() {
        let mut panel = Ssd1306Panel::new(FlakyInterface::new(2));

        assert_eq!(panel.clear(), Err(DisplayError::Communication));
        assert_eq!(panel.flush(), Err(DisplayError::NotInitialized));
        assert_eq!(panel.clear(), Err(DisplayError::Communication));
        assert!(!panel.is_initialized());

        assert_eq!(panel.clear(), Ok(()));
        assert_eq!(panel.flush(), Ok(()));
        assert!(panel.is_initialized());
    }
}
