//! SSD1306 OLED display wrapper and screen renderer.
//!
//! Layout (128×64):
//! ```text
//! ┌────────────────────────┬──────────┐
//! │ Decimeter              │ 60dB     │  header: title + threshold
//! └────────────────────────┴──────────┘
//!   body: one of the four screens
//! ```

use crate::config::{PROGRESS_BAR_HEIGHT, PROGRESS_BAR_WIDTH, PROGRESS_BAR_X, PROGRESS_BAR_Y};
use crate::error::Error;
use crate::ui::layout::{bar_fill_width, format_db, led_label, menu_arrows, menu_label, LevelBand};
use crate::ui::navigation::UiState;
use crate::ui::{MenuLayout, Screen};
use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Everything one frame needs.
pub struct Frame {
    pub ui: UiState,
    pub layout: MenuLayout,
    pub measured_db: u8,
}

const HEADER_HEIGHT: u32 = 14;
const HEADER_SPLIT_X: i32 = 78;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if let Err(e) = display.init().map_err(Error::from) {
        warn!("Display init: {}", e);
    }
    display.clear_buffer();
    let _ = flush(&mut display);
    display
}

/// Push the buffer to the panel, logging failures.
pub fn flush<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.flush().map_err(|e| {
        let e = Error::from(e);
        warn!("Display flush: {}", e);
        e
    })
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn text<I2C>(display: &mut Display<I2C>, s: &str, x: i32, y: i32)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::with_baseline(s, Point::new(x, y), text_style(), Baseline::Top).draw(display);
}

fn outline() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

/// Render a boot message below the header.
pub fn draw_splash<I2C>(display: &mut Display<I2C>, message: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    draw_header(display, None);
    text(display, message, 5, 25);
    let _ = flush(display);
}

/// Render the full frame for the current state.
pub fn draw_frame<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    draw_header(display, Some(frame.ui.threshold_db));

    match frame.ui.screen {
        Screen::Menu => draw_menu(display, frame),
        Screen::Measurement => draw_measurement(display, frame),
        Screen::SetThreshold => draw_set_threshold(display, frame),
        Screen::Configuration => draw_configuration(display, frame),
    }

    let _ = flush(display);
}

fn draw_header<I2C>(display: &mut Display<I2C>, threshold_db: Option<u8>)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Rectangle::new(Point::zero(), Size::new(128, HEADER_HEIGHT))
        .into_styled(outline())
        .draw(display);
    text(display, "Decimeter", 5, 2);

    if let Some(db) = threshold_db {
        let _ = Line::new(
            Point::new(HEADER_SPLIT_X, 0),
            Point::new(HEADER_SPLIT_X, HEADER_HEIGHT as i32 - 1),
        )
        .into_styled(outline())
        .draw(display);
        text(display, format_db(db).as_str(), HEADER_SPLIT_X + 5, 2);
    }
}

fn draw_menu<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    let index = frame.ui.menu_index;
    let arrows = menu_arrows(index, frame.layout.count());

    if arrows.left {
        text(display, "<", 5, 32);
    }
    text(display, menu_label(frame.ui.menu_item(frame.layout)), 25, 32);
    if arrows.right {
        text(display, ">", 117, 32);
    }
    text(display, "A:<  B:>  SW:open", 0, 54);
}

fn draw_measurement<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    let db = frame.measured_db;
    let origin = Point::new(PROGRESS_BAR_X, PROGRESS_BAR_Y);

    let _ = Rectangle::new(origin, Size::new(PROGRESS_BAR_WIDTH, PROGRESS_BAR_HEIGHT))
        .into_styled(outline())
        .draw(display);
    let filled = bar_fill_width(db, PROGRESS_BAR_WIDTH);
    if filled > 0 {
        let _ = Rectangle::new(origin, Size::new(filled, PROGRESS_BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
    }

    text(display, format_db(db).as_str(), 86, 23);
    text(display, LevelBand::classify(db, frame.ui.threshold_db).label(), 0, 40);
    text(display, "SW:back", 0, 54);
}

fn draw_set_threshold<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    text(display, "-", 20, 30);
    text(display, format_db(frame.ui.threshold_db).as_str(), 48, 30);
    text(display, "+", 102, 30);
    text(display, "A:-  B:+  SW:back", 0, 54);
}

fn draw_configuration<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    let led = frame.ui.led_on;
    let _ = Rectangle::new(Point::new(108, 28), Size::new(12, 12))
        .into_styled(if led {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            outline()
        })
        .draw(display);
    text(display, led_label(led), 0, 30);
    text(display, "A:toggle  SW:back", 0, 54);
}
