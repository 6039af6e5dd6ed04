use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{AMPLITUDE, DEFAULT_FREQUENCY, SAMPLE_RATE};

/// Sine tone synthesis state.
///
/// The control thread stores a new frequency at any time; the render thread
/// loads it once per buffer fill and advances the phase accumulator. Phase
/// belongs to the render path alone: a frequency change alters the slope of
/// the waveform, never the phase, which is what keeps the output click-free.
pub struct ToneEngine {
    /// Target frequency in Hz, stored as f64 bits.
    frequency_bits: AtomicU64,
    /// Accumulated phase angle in radians. Atomic only so the engine can be
    /// shared behind an `Arc`; nothing outside the render path writes it.
    phase_bits: AtomicU64,
}

impl ToneEngine {
    pub fn new() -> Self {
        Self {
            frequency_bits: AtomicU64::new(DEFAULT_FREQUENCY.to_bits()),
            phase_bits: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Store a new target frequency, picked up by the next buffer fill.
    /// Any value is accepted; the caller polices its own range.
    pub fn set_frequency(&self, hz: f64) {
        self.frequency_bits.store(hz.to_bits(), Ordering::Relaxed);
    }

    pub fn frequency(&self) -> f64 {
        f64::from_bits(self.frequency_bits.load(Ordering::Relaxed))
    }

    /// Current phase accumulator value in radians.
    pub fn phase(&self) -> f64 {
        f64::from_bits(self.phase_bits.load(Ordering::Relaxed))
    }

    /// Fill `buffer` with amplitude-scaled sine samples and advance the
    /// phase. Returns the number of frames written; an empty buffer writes
    /// nothing and returns 0. This is the real-time callback body: it runs
    /// in time proportional to `buffer.len()` with no allocation and no
    /// locking.
    pub fn render_into(&self, buffer: &mut [f32]) -> usize {
        if buffer.is_empty() {
            return 0;
        }

        // One frequency load per fill; the slope is constant within a buffer.
        let step = TAU * self.frequency() / SAMPLE_RATE;
        let mut phase = self.phase();

        for sample in buffer.iter_mut() {
            *sample = (AMPLITUDE * phase.sin()) as f32;
            phase += step;
            // Greater-than check, not a modulo: phase may sit above 2π by up
            // to one step between wraps, and never resets.
            if phase > TAU {
                phase -= TAU;
            }
        }

        self.phase_bits.store(phase.to_bits(), Ordering::Relaxed);
        buffer.len()
    }
}

impl Default for ToneEngine {
    fn default() -> Self {
        Self::new()
    }
}
