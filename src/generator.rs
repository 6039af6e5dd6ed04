use std::sync::Arc;

use crate::device::{CpalBackend, DeviceSession, OutputBackend};
use crate::engine::ToneEngine;
use crate::error::DeviceError;

/// Caller-facing surface tying one tone engine to one device session.
///
/// The engine lives behind an `Arc` shared with the render callback, so it
/// outlives every stream the session opens; frequency and phase carry
/// across play/stop cycles.
pub struct ToneGenerator<B: OutputBackend = CpalBackend> {
    engine: Arc<ToneEngine>,
    session: DeviceSession<B>,
}

impl ToneGenerator<CpalBackend> {
    pub fn new() -> Self {
        Self::with_backend(CpalBackend)
    }
}

impl Default for ToneGenerator<CpalBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: OutputBackend> ToneGenerator<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            engine: Arc::new(ToneEngine::new()),
            session: DeviceSession::with_backend(backend),
        }
    }

    /// Retarget the tone. Takes effect on the next hardware buffer.
    pub fn set_frequency(&self, hz: f64) {
        self.engine.set_frequency(hz);
    }

    pub fn frequency(&self) -> f64 {
        self.engine.frequency()
    }

    /// Start streaming to the default output device; a no-op when already
    /// playing.
    pub fn play(&mut self) -> Result<(), DeviceError> {
        self.session.start(&self.engine)
    }

    /// Stop and release the output device; a no-op when stopped.
    pub fn stop(&mut self) -> Result<(), DeviceError> {
        self.session.stop()
    }

    pub fn is_playing(&self) -> bool {
        self.session.is_running()
    }

    /// Shared handle to the engine, for callers that adjust frequency from
    /// another thread while the generator owns playback.
    pub fn engine(&self) -> Arc<ToneEngine> {
        Arc::clone(&self.engine)
    }
}
