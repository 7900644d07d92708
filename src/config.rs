//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and measurement
//! ranges live here so they can be tuned in one place.

use crate::ui::debounce::DebounceScope;
use crate::ui::MenuLayout;

// Buttons
//
// These are logical names; the actual `embassy_rp::peripherals::PIN_*`
// types are selected in `main.rs`.  Adjust for your custom board.
//
//   Button PREVIOUS (A)        → GPIO 5
//   Button NEXT (B)            → GPIO 6
//   Button SELECT (joystick)   → GPIO 22
//   I²C1 SDA                   → GPIO 14
//   I²C1 SCL                   → GPIO 15
//   Microphone (ADC channel 2) → GPIO 28
//   Status LED                 → GPIO 11

/// Minimum gap between two accepted presses (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 260;

/// Whether the debounce window is tracked per button line or shared
/// across all three.
pub const BUTTON_DEBOUNCE_SCOPE: DebounceScope = DebounceScope::PerButton;

// Menu

/// Active main-menu layout (3-item or 2-item variant).
pub const MENU_LAYOUT: MenuLayout = MenuLayout::Full;

// Threshold

/// Lowest threshold the user can set (dB).
pub const DB_MIN: u8 = 0;

/// Highest threshold the user can set (dB).
pub const DB_MAX: u8 = 150;

/// Threshold at power-up (dB).
pub const THRESHOLD_DEFAULT_DB: u8 = 60;

// Measurement

/// Width of one peak-to-peak sampling window (ms). 50 ms = 20 Hz.
pub const SAMPLE_WINDOW_MS: u64 = 50;

/// Saturation value of the 12-bit ADC.
pub const ADC_MAX_SAMPLE: u16 = 4095;

/// Reading shown when the window has no variation at all.
pub const DB_FLOOR: u8 = 0;

/// Upper end of the displayable range (dB).
pub const DISPLAY_DB_MAX: u8 = 150;

// Display

/// I²C bus frequency for the SSD1306 (Hz).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Pause between boot splash messages (ms).
pub const SPLASH_MS: u64 = 1500;

/// Measurement-screen level bar geometry (pixels).
pub const PROGRESS_BAR_X: i32 = 0;
pub const PROGRESS_BAR_Y: i32 = 20;
pub const PROGRESS_BAR_WIDTH: u32 = 82;
pub const PROGRESS_BAR_HEIGHT: u32 = 16;

/// Readings within this many dB below the threshold are "medium".
pub const LEVEL_MEDIUM_MARGIN_DB: u8 = 10;
