use std::error::Error;
use std::fmt;

/// Device-lifecycle failures surfaced to the control-thread caller.
///
/// Every variant leaves the session closed with no native resources held,
/// so retrying `start` is always safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// No default output device exists.
    DeviceNotFound,
    /// The output device could not be interrogated or instantiated.
    InstantiationFailed(String),
    /// The render callback could not be installed on the stream.
    CallbackInstallFailed(String),
    /// The device rejected the fixed mono / f32 / 44.1 kHz stream format.
    FormatConfigurationFailed(String),
    /// The hardware stream refused to start.
    StartFailed(String),
    /// The hardware stream reported an error while stopping; the handle is
    /// cleared regardless.
    TeardownFailed(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::DeviceNotFound => {
                write!(f, "no default audio output device found")
            }
            DeviceError::InstantiationFailed(err) => {
                write!(f, "could not instantiate the output device: {}", err)
            }
            DeviceError::CallbackInstallFailed(err) => {
                write!(f, "could not install the render callback: {}", err)
            }
            DeviceError::FormatConfigurationFailed(err) => {
                write!(f, "output stream format rejected: {}", err)
            }
            DeviceError::StartFailed(err) => {
                write!(f, "output stream failed to start: {}", err)
            }
            DeviceError::TeardownFailed(err) => {
                write!(f, "output stream failed to stop cleanly: {}", err)
            }
        }
    }
}

impl Error for DeviceError {}
