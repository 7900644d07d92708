//! Screen/menu state machine.
//!
//! Every `(Screen, ButtonId)` pair has an outcome; out-of-range
//! adjustments are clamped, never rejected.
//!
//! ```text
//! Screen         | Previous        | Next            | Select
//! ---------------+-----------------+-----------------+------------------
//! Menu           | item - 1 (>= 0) | item + 1 (<= n) | open item's screen
//! Measurement    | -               | -               | back to Menu
//! SetThreshold   | threshold - 1   | threshold + 1   | back to Menu
//! Configuration  | toggle LED      | -               | back to Menu
//! ```

use super::input_logic::{select_next, select_prev, step_down, step_up};
use super::{ButtonId, MenuItem, MenuLayout, Screen};
use crate::config::{DB_MAX, DB_MIN, THRESHOLD_DEFAULT_DB};

/// What a button press changed, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// No-op press or a clamped adjustment.
    Unchanged,
    MenuMoved(MenuItem),
    ScreenChanged { from: Screen, to: Screen },
    ThresholdChanged(u8),
    LedToggled(bool),
}

/// Complete navigation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiState {
    pub screen: Screen,
    /// Index into the active `MenuLayout`; only meaningful on `Screen::Menu`.
    pub menu_index: u8,
    pub threshold_db: u8,
    pub led_on: bool,
}

impl UiState {
    /// Power-up state: menu, first item, default threshold, LED on.
    pub const fn new() -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            threshold_db: THRESHOLD_DEFAULT_DB,
            led_on: true,
        }
    }

    pub fn menu_item(&self, layout: MenuLayout) -> MenuItem {
        layout.item(self.menu_index)
    }

    /// Apply one debounced press.
    pub fn handle(&mut self, layout: MenuLayout, button: ButtonId) -> Transition {
        match (self.screen, button) {
            (Screen::Menu, ButtonId::Previous) => {
                self.move_cursor(layout, select_prev(self.menu_index))
            }
            (Screen::Menu, ButtonId::Next) => {
                self.move_cursor(layout, select_next(self.menu_index, layout.count()))
            }
            (Screen::Menu, ButtonId::Select) => {
                let to = self.menu_item(layout).target();
                self.go_to(to)
            }

            (Screen::SetThreshold, ButtonId::Previous) => {
                self.set_threshold(step_down(self.threshold_db, DB_MIN))
            }
            (Screen::SetThreshold, ButtonId::Next) => {
                self.set_threshold(step_up(self.threshold_db, DB_MAX))
            }

            (Screen::Configuration, ButtonId::Previous) => {
                self.led_on = !self.led_on;
                Transition::LedToggled(self.led_on)
            }

            (Screen::Measurement, ButtonId::Previous | ButtonId::Next)
            | (Screen::Configuration, ButtonId::Next) => Transition::Unchanged,

            (Screen::Measurement | Screen::SetThreshold | Screen::Configuration, ButtonId::Select) => {
                self.go_to(Screen::Menu)
            }
        }
    }

    fn move_cursor(&mut self, layout: MenuLayout, index: u8) -> Transition {
        if index == self.menu_index {
            return Transition::Unchanged;
        }
        self.menu_index = index;
        Transition::MenuMoved(self.menu_item(layout))
    }

    fn set_threshold(&mut self, value: u8) -> Transition {
        if value == self.threshold_db {
            return Transition::Unchanged;
        }
        self.threshold_db = value;
        Transition::ThresholdChanged(value)
    }

    fn go_to(&mut self, to: Screen) -> Transition {
        let from = self.screen;
        self.screen = to;
        Transition::ScreenChanged { from, to }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(screen: Screen) -> UiState {
        UiState {
            screen,
            ..UiState::new()
        }
    }

    /// Tiny LCG so sequences are reproducible without extra crates.
    fn buttons(seed: u32, len: usize) -> impl Iterator<Item = ButtonId> {
        let mut x = seed;
        (0..len).map(move |_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if (x >> 16) & 1 == 0 {
                ButtonId::Previous
            } else {
                ButtonId::Next
            }
        })
    }

    #[test]
    fn starts_on_menu_first_item() {
        let s = UiState::new();
        assert_eq!(s.screen, Screen::Menu);
        assert_eq!(s.menu_index, 0);
        assert_eq!(s.threshold_db, THRESHOLD_DEFAULT_DB);
        assert!(s.led_on);
    }

    #[test]
    fn menu_cursor_saturates_without_wrapping() {
        let mut s = UiState::new();
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Previous), Transition::Unchanged);
        assert_eq!(s.menu_index, 0);

        for _ in 0..5 {
            s.handle(MenuLayout::Full, ButtonId::Next);
        }
        assert_eq!(s.menu_index, 2);
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Next), Transition::Unchanged);
    }

    #[test]
    fn menu_cursor_stays_in_range_for_any_sequence() {
        for layout in [MenuLayout::Full, MenuLayout::Compact] {
            for seed in 0..32 {
                let mut s = UiState::new();
                for b in buttons(seed, 200) {
                    s.handle(layout, b);
                    assert!((s.menu_index as usize) < layout.count());
                    assert_eq!(s.screen, Screen::Menu);
                }
            }
        }
    }

    #[test]
    fn threshold_stays_in_range_for_any_sequence() {
        for seed in 0..32 {
            let mut s = on(Screen::SetThreshold);
            s.threshold_db = ((seed * 5) as u8).min(DB_MAX);
            for b in buttons(seed, 400) {
                s.handle(MenuLayout::Full, b);
                assert!((DB_MIN..=DB_MAX).contains(&s.threshold_db));
            }
        }
    }

    #[test]
    fn threshold_clamps_at_both_ends() {
        let mut s = on(Screen::SetThreshold);
        s.threshold_db = 0;
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Previous), Transition::Unchanged);
        assert_eq!(s.threshold_db, 0);

        for _ in 0..151 {
            s.handle(MenuLayout::Full, ButtonId::Next);
        }
        assert_eq!(s.threshold_db, 150);
    }

    #[test]
    fn threshold_change_is_reported() {
        let mut s = on(Screen::SetThreshold);
        assert_eq!(
            s.handle(MenuLayout::Full, ButtonId::Next),
            Transition::ThresholdChanged(THRESHOLD_DEFAULT_DB + 1)
        );
    }

    #[test]
    fn select_routes_each_item_to_its_screen() {
        let expected = [
            (0, Screen::Measurement),
            (1, Screen::SetThreshold),
            (2, Screen::Configuration),
        ];
        for (index, screen) in expected {
            for _ in 0..3 {
                let mut s = UiState::new();
                s.menu_index = index;
                s.handle(MenuLayout::Full, ButtonId::Select);
                assert_eq!(s.screen, screen);
            }
        }
    }

    #[test]
    fn compact_layout_skips_threshold_editor() {
        let mut s = UiState::new();
        s.menu_index = 1;
        s.handle(MenuLayout::Compact, ButtonId::Select);
        assert_eq!(s.screen, Screen::Configuration);
    }

    #[test]
    fn select_from_any_other_screen_returns_to_menu() {
        for screen in Screen::ALL.into_iter().filter(|s| *s != Screen::Menu) {
            let mut s = on(screen);
            assert_eq!(
                s.handle(MenuLayout::Full, ButtonId::Select),
                Transition::ScreenChanged {
                    from: screen,
                    to: Screen::Menu
                }
            );
            assert_eq!(s.screen, Screen::Menu);
        }
    }

    #[test]
    fn menu_index_survives_a_round_trip() {
        let mut s = UiState::new();
        s.handle(MenuLayout::Full, ButtonId::Next);
        s.handle(MenuLayout::Full, ButtonId::Select);
        s.handle(MenuLayout::Full, ButtonId::Select);
        assert_eq!(s.screen, Screen::Menu);
        assert_eq!(s.menu_index, 1);
    }

    #[test]
    fn configuration_previous_toggles_led() {
        let mut s = on(Screen::Configuration);
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Previous), Transition::LedToggled(false));
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Previous), Transition::LedToggled(true));
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Next), Transition::Unchanged);
        assert!(s.led_on);
    }

    #[test]
    fn measurement_ignores_adjust_buttons() {
        let mut s = on(Screen::Measurement);
        let before = s;
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Previous), Transition::Unchanged);
        assert_eq!(s.handle(MenuLayout::Full, ButtonId::Next), Transition::Unchanged);
        assert_eq!(s, before);
    }

    #[test]
    fn adjust_buttons_only_touch_their_own_screen_field() {
        let mut s = on(Screen::SetThreshold);
        s.handle(MenuLayout::Full, ButtonId::Previous);
        assert!(s.led_on);
        assert_eq!(s.menu_index, 0);

        let mut s = on(Screen::Configuration);
        s.handle(MenuLayout::Full, ButtonId::Previous);
        assert_eq!(s.threshold_db, THRESHOLD_DEFAULT_DB);
    }

    #[test]
    fn every_screen_button_pair_is_handled() {
        for layout in [MenuLayout::Full, MenuLayout::Compact] {
            for screen in Screen::ALL {
                for button in ButtonId::ALL {
                    let mut s = on(screen);
                    s.handle(layout, button);
                    assert!((s.menu_index as usize) < layout.count());
                }
            }
        }
    }
}
