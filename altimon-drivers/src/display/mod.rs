//! Display implementations

pub mod ssd1306;

pub use self::ssd1306::Ssd1306Panel;
