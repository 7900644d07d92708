//! Navigation state shared between the button task and the render loop.
//!
//! Each field lives in its own atomic cell and is written with a single
//! store.  The button task is the only writer; the render loop reads a
//! snapshot that may straddle a concurrent press, which is fine because
//! the next loop iteration redraws from fresh values.
//!
//! Only `load`/`store` are used, so this also works on cores without
//! atomic read-modify-write instructions (Cortex-M0+).

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use super::navigation::{Transition, UiState};
use super::{ButtonId, MenuLayout, Screen};

pub struct SharedUi {
    layout: MenuLayout,
    screen: AtomicU8,
    menu_index: AtomicU8,
    threshold_db: AtomicU8,
    led_on: AtomicBool,
}

impl SharedUi {
    /// Power-up state for the given menu layout.
    pub const fn new(layout: MenuLayout) -> Self {
        let initial = UiState::new();
        Self {
            layout,
            screen: AtomicU8::new(initial.screen.as_raw()),
            menu_index: AtomicU8::new(initial.menu_index),
            threshold_db: AtomicU8::new(initial.threshold_db),
            led_on: AtomicBool::new(initial.led_on),
        }
    }

    pub fn layout(&self) -> MenuLayout {
        self.layout
    }

    /// Read every field once.
    pub fn snapshot(&self) -> UiState {
        UiState {
            screen: Screen::from_raw(self.screen.load(Ordering::Relaxed)),
            menu_index: self.menu_index.load(Ordering::Relaxed),
            threshold_db: self.threshold_db.load(Ordering::Relaxed),
            led_on: self.led_on.load(Ordering::Relaxed),
        }
    }

    /// Run one press through the state machine and publish the result.
    ///
    /// Must only be called from the single writer context.
    pub fn apply(&self, button: ButtonId) -> Transition {
        let mut state = self.snapshot();
        let transition = state.handle(self.layout, button);

        match transition {
            Transition::Unchanged => {}
            Transition::MenuMoved(_) => {
                self.menu_index.store(state.menu_index, Ordering::Relaxed);
            }
            Transition::ScreenChanged { .. } => {
                self.screen.store(state.screen.as_raw(), Ordering::Relaxed);
            }
            Transition::ThresholdChanged(db) => {
                self.threshold_db.store(db, Ordering::Relaxed);
            }
            Transition::LedToggled(on) => {
                self.led_on.store(on, Ordering::Relaxed);
            }
        }

        transition
    }
}
