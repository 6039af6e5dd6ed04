//! Continuous sine tone generation: a real-time render engine plus the
//! device session that streams it to the default audio output.
//!
//! The control thread adjusts frequency and toggles playback; the render
//! thread fills hardware buffers. The only state they share is a single
//! atomic frequency word.

pub mod device;
pub mod engine;
pub mod error;
pub mod generator;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: f64 = 44_100.0;

/// Linear amplitude scalar; leaves headroom so the tone never clips.
pub const AMPLITUDE: f64 = 0.25;

/// Mono output.
pub const CHANNEL_COUNT: u16 = 1;

/// Samples are 32-bit native-endian floats.
pub const BYTES_PER_SAMPLE: usize = std::mem::size_of::<f32>();

/// Frequency the engine starts at before the caller adjusts it.
pub const DEFAULT_FREQUENCY: f64 = 440.0;

pub use device::{CpalBackend, DeviceSession, OutputBackend, OutputStream, RenderFn};
pub use engine::ToneEngine;
pub use error::DeviceError;
pub use generator::ToneGenerator;
