//! GPIO button input with edge-triggered debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - PREVIOUS (A) - left in the menu / decrement / toggle LED
//!   - NEXT (B)     - right in the menu / increment
//!   - SELECT (SW)  - open the highlighted item / back to the menu
//!
//! One task waits on all three lines at once, debounces the edge by
//! timestamp, and applies the press to the shared UI state.  It runs on
//! the high-priority executor so presses land even while the main loop
//! is busy sampling the microphone.

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_DEBOUNCE_SCOPE};
use crate::ui::debounce::Debouncer;
use crate::ui::navigation::Transition;
use crate::ui::shared::SharedUi;
use crate::ui::{ButtonId, Screen};
use defmt::{debug, info, trace};
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

/// The three button lines, already configured as pulled-up inputs.
pub struct Buttons {
    pub previous: Input<'static>,
    pub next: Input<'static>,
    pub select: Input<'static>,
}

impl Buttons {
    /// Wait for the next falling edge on any line.
    async fn next_edge(&mut self) -> ButtonId {
        match select3(
            self.previous.wait_for_falling_edge(),
            self.next.wait_for_falling_edge(),
            self.select.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => ButtonId::Previous,
            Either3::Second(()) => ButtonId::Next,
            Either3::Third(()) => ButtonId::Select,
        }
    }
}

/// Run the button loop forever.
pub async fn button_task(mut buttons: Buttons, ui: &'static SharedUi) -> ! {
    let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_SCOPE, BUTTON_DEBOUNCE_MS);
    info!("Buttons: {} ms debounce, {}", BUTTON_DEBOUNCE_MS, debouncer.scope());

    loop {
        let id = buttons.next_edge().await;
        let now = Instant::now().as_millis();

        let Some(event) = debouncer.on_edge(id, now) else {
            trace!("Button: {} bounce @ {}", id, now);
            continue;
        };

        log_transition(ui.apply(event.id));
    }
}

fn log_transition(transition: Transition) {
    match transition {
        Transition::Unchanged => trace!("UI: no change"),
        Transition::MenuMoved(item) => debug!("Menu: {}", item),
        Transition::ScreenChanged { to: Screen::Menu, .. } => info!("UI: back to menu"),
        Transition::ScreenChanged { from, to } => info!("UI: {} -> {}", from, to),
        Transition::ThresholdChanged(db) => info!("Threshold: {} dB", db),
        Transition::LedToggled(on) => info!("LED: {}", if on { "on" } else { "off" }),
    }
}
