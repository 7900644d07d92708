//! Unified error type for the firmware's hardware edges.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! None of these stop the main loop: a failed display transfer skips one
//! frame, a failed conversion becomes a clipped sample.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    // Measurement
    /// The ADC reported a conversion failure.
    Adc,
}

// Convenience conversions

impl From<embassy_rp::adc::Error> for Error {
    fn from(_: embassy_rp::adc::Error) -> Self {
        Error::Adc
    }
}

impl From<display_interface::DisplayError> for Error {
    fn from(_: display_interface::DisplayError) -> Self {
        Error::Display
    }
}
