use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, BuildStreamError, SampleFormat, SampleRate, StreamConfig};
use log::{debug, error, warn};

use crate::engine::ToneEngine;
use crate::error::DeviceError;
use crate::{CHANNEL_COUNT, SAMPLE_RATE};

/// Buffer-fill closure handed to the backend; invoked on the audio thread
/// with the mono f32 hardware buffer.
pub type RenderFn = Box<dyn FnMut(&mut [f32]) + Send + 'static>;

/// Seam over the native audio output API: device discovery, instantiation,
/// callback installation, and format configuration in one step.
pub trait OutputBackend {
    type Stream: OutputStream;

    fn open_output(&mut self, render: RenderFn) -> Result<Self::Stream, DeviceError>;
}

/// A configured native output stream. Dropping it releases the native
/// instance and stops callback delivery.
pub trait OutputStream {
    fn start(&mut self) -> Result<(), DeviceError>;
    fn stop(&mut self) -> Result<(), DeviceError>;
}

/// Owns the native output endpoint's lifecycle: `Closed -> Running -> Closed`.
///
/// `stop` always tears down fully rather than pausing; every `start` opens a
/// fresh native stream. At most one stream exists per session, and repeated
/// or out-of-order `start`/`stop` calls are no-ops.
pub struct DeviceSession<B: OutputBackend = CpalBackend> {
    backend: B,
    stream: Option<B::Stream>,
}

impl DeviceSession<CpalBackend> {
    pub fn new() -> Self {
        Self::with_backend(CpalBackend)
    }
}

impl Default for DeviceSession<CpalBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: OutputBackend> DeviceSession<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            stream: None,
        }
    }

    /// Open the default output device and start pulling samples from
    /// `engine`. A no-op when a stream is already running. On any failure
    /// the partially acquired native resources are released before the
    /// error is returned and the session stays closed.
    pub fn start(&mut self, engine: &Arc<ToneEngine>) -> Result<(), DeviceError> {
        if self.stream.is_some() {
            debug!("output stream already running, start is a no-op");
            return Ok(());
        }

        let engine = Arc::clone(engine);
        let mut stream = self.backend.open_output(Box::new(move |buffer| {
            engine.render_into(buffer);
        }))?;

        // A failed start drops `stream` right here, releasing the native
        // instance before the error propagates.
        stream.start()?;

        debug!("output stream running");
        self.stream = Some(stream);
        Ok(())
    }

    /// Stop and tear down the native stream. A no-op when closed. The
    /// handle is cleared even when the native stop reports an error; once
    /// this returns the render callback can no longer fire.
    pub fn stop(&mut self) -> Result<(), DeviceError> {
        if let Some(mut stream) = self.stream.take() {
            let result = stream.stop();
            if let Err(err) = &result {
                warn!("output stream teardown reported an error: {}", err);
            }
            drop(stream);
            debug!("output stream closed");
            result
        } else {
            debug!("no output stream open, stop is a no-op");
            Ok(())
        }
    }

    pub fn is_running(&self) -> bool {
        self.stream.is_some()
    }
}

/// Production backend over the platform's default audio host.
pub struct CpalBackend;

impl OutputBackend for CpalBackend {
    type Stream = CpalStream;

    fn open_output(&mut self, mut render: RenderFn) -> Result<CpalStream, DeviceError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(DeviceError::DeviceNotFound)?;

        let sample_rate = SampleRate(SAMPLE_RATE as u32);
        let supports_format = device
            .supported_output_configs()
            .map_err(|err| DeviceError::InstantiationFailed(err.to_string()))?
            .any(|range| {
                range.channels() == CHANNEL_COUNT
                    && range.sample_format() == SampleFormat::F32
                    && range.min_sample_rate() <= sample_rate
                    && sample_rate <= range.max_sample_rate()
            });
        if !supports_format {
            return Err(DeviceError::FormatConfigurationFailed(format!(
                "device does not support {} channel f32 output at {} Hz",
                CHANNEL_COUNT, SAMPLE_RATE
            )));
        }

        let config = StreamConfig {
            channels: CHANNEL_COUNT,
            sample_rate,
            buffer_size: BufferSize::Default,
        };

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| render(data),
                |err| error!("output stream error: {}", err),
                None,
            )
            .map_err(|err| match err {
                BuildStreamError::DeviceNotAvailable => DeviceError::DeviceNotFound,
                BuildStreamError::StreamConfigNotSupported => {
                    DeviceError::FormatConfigurationFailed(err.to_string())
                }
                _ => DeviceError::CallbackInstallFailed(err.to_string()),
            })?;

        Ok(CpalStream { inner: stream })
    }
}

/// cpal-backed output stream. Dropping destroys the native stream, which
/// synchronously ends callback delivery.
pub struct CpalStream {
    inner: cpal::Stream,
}

impl OutputStream for CpalStream {
    fn start(&mut self) -> Result<(), DeviceError> {
        self.inner
            .play()
            .map_err(|err| DeviceError::StartFailed(err.to_string()))
    }

    fn stop(&mut self) -> Result<(), DeviceError> {
        self.inner
            .pause()
            .map_err(|err| DeviceError::TeardownFailed(err.to_string()))
    }
}
