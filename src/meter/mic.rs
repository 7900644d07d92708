//! MAX4466 electret microphone on the RP2040 ADC.
//!
//! The amplifier output is biased at mid-rail, so a quiet room reads
//! around 2048 with a small swing; loud sounds widen the swing.

use defmt::warn;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_time::Instant;

use crate::config::ADC_MAX_SAMPLE;
use crate::error::Error;
use crate::meter::{Clock, SampleSource};

/// One ADC channel polled in blocking mode.
pub struct Microphone<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> Microphone<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }

    fn try_read(&mut self) -> Result<u16, Error> {
        Ok(self.adc.blocking_read(&mut self.channel)?)
    }
}

impl SampleSource for Microphone<'_> {
    fn max_sample(&self) -> u16 {
        ADC_MAX_SAMPLE
    }

    /// A failed conversion is reported as a clipped sample so it cannot
    /// skew the window extremes.
    fn read(&mut self) -> u16 {
        match self.try_read() {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Mic: {}", e);
                ADC_MAX_SAMPLE
            }
        }
    }
}

/// Milliseconds since boot from the embassy time driver.
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
