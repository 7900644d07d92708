//! Decimeter firmware for the RP2040.
//!
//! Samples a MAX4466 microphone, shows the sound level on an SSD1306
//! OLED and lets the user browse a small menu with three buttons.
//!
//! # Architecture
//!
//! Two executors share one core:
//! - High priority (`SWI_IRQ_1`): the button task.  It preempts the main
//!   loop, debounces edges and updates the shared UI state.
//! - Thread mode: the main loop.  Each iteration snapshots the UI state,
//!   draws the frame, then blocks for one 50 ms sampling window.
//!
//! # Button Controls
//!
//! - **A** (GPIO 5): previous item / decrement / toggle LED
//! - **B** (GPIO 6): next item / increment
//! - **SW** (GPIO 22): open item / back to menu

#![no_std]
#![no_main]

mod error;

// Re-export host-testable modules from the library and add the drivers
// that only exist on the device.
mod config {
    pub use decimeter::config::*;
}
mod meter {
    pub use decimeter::meter::*;
    pub mod mic;
}
mod ui {
    pub use decimeter::ui::*;
    pub mod buttons;
    pub mod display;
}

use cortex_m_rt::entry;
use decimeter::ui::shared::SharedUi;
use defmt::{debug, info};
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::meter::mic::{Microphone, UptimeClock};
use crate::ui::buttons::Buttons;
use crate::ui::display::{self, Frame};

/// Navigation state: written by the button task, read by the main loop.
static UI: SharedUi = SharedUi::new(config::MENU_LAYOUT);

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[embassy_executor::task]
async fn button_loop(buttons: Buttons) {
    ui::buttons::button_task(buttons, &UI).await
}

#[embassy_executor::task]
async fn meter_loop(
    i2c: I2c<'static, I2C1, i2c::Blocking>,
    mut mic: Microphone<'static>,
    mut led: Output<'static>,
) {
    let mut oled = display::init(i2c);

    display::draw_splash(&mut oled, "Starting");
    Timer::after(Duration::from_millis(config::SPLASH_MS)).await;
    display::draw_splash(&mut oled, "Config ADC");
    Timer::after(Duration::from_millis(config::SPLASH_MS)).await;

    info!("Meter: {} ms window", config::SAMPLE_WINDOW_MS);
    let clock = UptimeClock;
    let mut measured_db = config::DB_FLOOR;

    loop {
        let state = UI.snapshot();
        led.set_level(Level::from(state.led_on));
        display::draw_frame(
            &mut oled,
            &Frame {
                ui: state,
                layout: UI.layout(),
                measured_db,
            },
        );

        // Blocks for the whole window; only the button task can run meanwhile.
        let m = meter::measure(&mut mic, &clock, config::SAMPLE_WINDOW_MS);
        measured_db = m.db;
        debug!(
            "Window: p2p={} samples={} clipped={}",
            m.peak_to_peak, m.samples, m.clipped
        );
        info!("Sound level: {} dB", m.db);
    }
}

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    info!("decimeter starting");

    let buttons = Buttons {
        previous: Input::new(p.PIN_5, Pull::Up),
        next: Input::new(p.PIN_6, Pull::Up),
        select: Input::new(p.PIN_22, Pull::Up),
    };

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.must_spawn(button_loop(buttons));

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mic = Microphone::new(
        Adc::new_blocking(p.ADC, adc::Config::default()),
        Channel::new_pin(p.PIN_28, Pull::None),
    );
    let led = Output::new(p.PIN_11, Level::High);

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(meter_loop(i2c, mic, led));
    })
}
