//! Graphics error types

use ash::vk;
use thiserror::Error;

use super::instance::InstanceState;

/// Text used when the windowing library has nothing to report
pub const NO_DIAGNOSTIC: &str = "no diagnostic available";

/// Graphics instance errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The windowing library advertised no instance extensions
    #[error("no presentation extensions")]
    NoPresentationExtensions,

    /// The driver rejected instance creation
    #[error("could not create instance ({result:?}): {diagnostic}")]
    InstanceCreation {
        /// Status returned by the driver
        result: vk::Result,
        /// Windowing library diagnostic
        diagnostic: String,
    },

    /// Physical device enumeration itself failed
    #[error("physical device enumeration failed ({0:?})")]
    DeviceEnumeration(vk::Result),

    /// Enumeration succeeded but found nothing
    #[error("no capable device found: {diagnostic}")]
    NoCapableDevice {
        /// Windowing library diagnostic
        diagnostic: String,
    },

    /// The surface could not be bound to the window
    #[error("could not create surface ({result:?}): {diagnostic}")]
    SurfaceCreation {
        /// Status returned by the binding call
        result: vk::Result,
        /// Windowing library diagnostic
        diagnostic: String,
    },

    /// An operation was called out of order
    #[error("operation requires instance state {expected:?}, but it is {actual:?}")]
    InvalidState {
        /// State the operation needs
        expected: InstanceState,
        /// State the instance is in
        actual: InstanceState,
    },
}

/// Result type for graphics operations
pub type GraphicsResult<T> = Result<T, GraphicsError>;
