//! Host-testable library interface for decimeter.
//!
//! Holds the hardware-independent logic: button debouncing, the
//! screen/menu state machine, and the peak-to-peak sound-level pipeline.
//! Everything here builds without the embedded stack.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and re-exports these modules alongside its hardware drivers.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod meter;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - edge → debounce → state machine
// ═══════════════════════════════════════════════════════════════════════════
