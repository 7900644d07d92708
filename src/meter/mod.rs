//! Sound-level measurement: fixed-window peak-to-peak on raw ADC samples,
//! mapped to a decibel-like scale for display.
//!
//! The window loop blocks for its full duration.  On the device it runs
//! on the low-priority executor, so button handling still preempts it.


use crate::config::{DB_FLOOR, DISPLAY_DB_MAX};

/// Something that yields one raw amplitude sample per call.
pub trait SampleSource {
    /// Saturation value; samples at or above it are treated as clipped.
    fn max_sample(&self) -> u16;

    fn read(&mut self) -> u16;
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Running extremes over one window, ignoring clipped samples.
#[derive(Clone, Copy, Debug)]
pub struct PeakDetector {
    saturation: u16,
    signal_max: u16,
    signal_min: u16,
    samples: u32,
    clipped: u32,
}

impl PeakDetector {
    pub const fn new(saturation: u16) -> Self {
        Self {
            saturation,
            signal_max: u16::MIN,
            signal_min: u16::MAX,
            samples: 0,
            clipped: 0,
        }
    }

    pub fn push(&mut self, sample: u16) {
        self.samples += 1;
        if sample >= self.saturation {
            self.clipped += 1;
            return;
        }
        if sample > self.signal_max {
            self.signal_max = sample;
        }
        if sample < self.signal_min {
            self.signal_min = sample;
        }
    }

    /// `max - min`, or zero if no unclipped sample was seen.
    pub fn peak_to_peak(&self) -> u16 {
        self.signal_max.saturating_sub(self.signal_min)
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn clipped(&self) -> u32 {
        self.clipped
    }
}

/// Result of one sampling window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub peak_to_peak: u16,
    pub db: u8,
    pub samples: u32,
    pub clipped: u32,
}

/// Sample `source` for `window_ms` and reduce the window to a reading.
pub fn measure<S, C>(source: &mut S, clock: &C, window_ms: u64) -> Measurement
where
    S: SampleSource,
    C: Clock,
{
    let mut detector = PeakDetector::new(source.max_sample());
    let start = clock.now_ms();

    while clock.now_ms().saturating_sub(start) < window_ms {
        detector.push(source.read());
    }

    let peak_to_peak = detector.peak_to_peak();
    Measurement {
        peak_to_peak,
        db: to_db(peak_to_peak),
        samples: detector.samples(),
        clipped: detector.clipped(),
    }
}

/// `round(20 * log10(peak_to_peak))`, clamped to the display range.
///
/// A flat window has no logarithm; it reads as `DB_FLOOR`.
pub fn to_db(peak_to_peak: u16) -> u8 {
    if peak_to_peak == 0 {
        return DB_FLOOR;
    }
    let db = libm::roundf(20.0 * libm::log10f(peak_to_peak as f32));
    db.clamp(DB_FLOOR as f32, DISPLAY_DB_MAX as f32) as u8
}
