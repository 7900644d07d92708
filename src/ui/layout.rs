//! Text and geometry decisions for the OLED screens.
//!
//! Kept free of any display driver so the renderer stays a thin
//! drawing layer and these rules can be checked on the host.

use core::fmt::Write;

use super::MenuItem;
use crate::config::{DISPLAY_DB_MAX, LEVEL_MEDIUM_MARGIN_DB};

/// `"60dB"`-style label; fits any `u8`.
pub fn format_db(value: u8) -> heapless::String<8> {
    let mut s = heapless::String::new();
    let _ = write!(s, "{}dB", value);
    s
}

pub fn menu_label(item: MenuItem) -> &'static str {
    match item {
        MenuItem::View => "VIEW",
        MenuItem::SetThreshold => "SET LEVEL",
        MenuItem::Configure => "CONFIGURE",
    }
}

pub fn led_label(on: bool) -> &'static str {
    if on {
        "LED ON"
    } else {
        "LED OFF"
    }
}

/// Which scroll hints to draw around the visible menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuArrows {
    pub left: bool,
    pub right: bool,
}

pub fn menu_arrows(index: u8, item_count: usize) -> MenuArrows {
    MenuArrows {
        left: index > 0,
        right: (index as usize) + 1 < item_count,
    }
}

/// Filled part of the level bar, proportional to `db / DISPLAY_DB_MAX`.
pub fn bar_fill_width(db: u8, bar_width: u32) -> u32 {
    let db = db.min(DISPLAY_DB_MAX) as u32;
    db * bar_width / DISPLAY_DB_MAX as u32
}

/// Loudness relative to the user threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LevelBand {
    Low,
    Medium,
    High,
}

impl LevelBand {
    pub fn classify(measured_db: u8, threshold_db: u8) -> Self {
        if measured_db >= threshold_db {
            LevelBand::High
        } else if measured_db.saturating_add(LEVEL_MEDIUM_MARGIN_DB) >= threshold_db {
            LevelBand::Medium
        } else {
            LevelBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LevelBand::Low => "LOW",
            LevelBand::Medium => "MEDIUM",
            LevelBand::High => "HIGH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_labels() {
        assert_eq!(format_db(0).as_str(), "0dB");
        assert_eq!(format_db(60).as_str(), "60dB");
        assert_eq!(format_db(u8::MAX).as_str(), "255dB");
    }

    #[test]
    fn arrows_follow_menu_position() {
        assert_eq!(menu_arrows(0, 3), MenuArrows { left: false, right: true });
        assert_eq!(menu_arrows(1, 3), MenuArrows { left: true, right: true });
        assert_eq!(menu_arrows(2, 3), MenuArrows { left: true, right: false });
        assert_eq!(menu_arrows(1, 2), MenuArrows { left: true, right: false });
    }

    #[test]
    fn bar_is_proportional_and_capped() {
        assert_eq!(bar_fill_width(0, 82), 0);
        assert_eq!(bar_fill_width(75, 82), 41);
        assert_eq!(bar_fill_width(150, 82), 82);
        assert_eq!(bar_fill_width(200, 82), 82);
    }

    #[test]
    fn level_bands_around_threshold() {
        assert_eq!(LevelBand::classify(60, 60), LevelBand::High);
        assert_eq!(LevelBand::classify(59, 60), LevelBand::Medium);
        assert_eq!(LevelBand::classify(50, 60), LevelBand::Medium);
        assert_eq!(LevelBand::classify(49, 60), LevelBand::Low);
        assert_eq!(LevelBand::classify(0, 0), LevelBand::High);
        assert_eq!(LevelBand::classify(250, 255), LevelBand::Medium);
    }

    #[test]
    fn labels_are_short_enough_for_the_screen() {
        // 6x10 font, 128 px wide, item text starts at x = 25.
        for item in [MenuItem::View, MenuItem::SetThreshold, MenuItem::Configure] {
            assert!(menu_label(item).len() * 6 <= 128 - 25 - 12);
        }
        assert_eq!(led_label(true), "LED ON");
        assert_eq!(led_label(false), "LED OFF");
        assert_eq!(LevelBand::High.label(), "HIGH");
    }
}
